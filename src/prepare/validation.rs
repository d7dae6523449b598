//! Deposit-side token restrictions.

use crate::domain::{BinId, BinPosition, DepositIntent};
use crate::error::{DlmmError, Result};

/// Checks that a deposit respects its bin's token side.
///
/// Bins below the active bin hold only Y, bins above hold only X, and the
/// active bin takes either or both.  A deposit of nothing is rejected in
/// every bin.
///
/// Returns the bin's position relative to the active bin.
///
/// # Errors
///
/// Returns [`DlmmError::InvalidDeposit`] naming the violated restriction.
///
/// # Examples
///
/// ```
/// use dlmm_liquidity::domain::{Amount, BinId, BinPosition, DepositIntent};
/// use dlmm_liquidity::prepare::validate_deposit;
///
/// let below = DepositIntent::y_only(BinId::new(-2), Amount::new(500));
/// assert_eq!(validate_deposit(&below, BinId::new(0)), Ok(BinPosition::Below));
///
/// let wrong_side = DepositIntent::x_only(BinId::new(-2), Amount::new(500));
/// assert!(validate_deposit(&wrong_side, BinId::new(0)).is_err());
/// ```
pub fn validate_deposit(intent: &DepositIntent, active_bin_id: BinId) -> Result<BinPosition> {
    let bin_id = intent.bin_id().get();
    let position = intent.bin_id().position_relative_to(active_bin_id);

    if intent.is_empty() {
        let reason = if position.is_active() {
            "active bin deposit needs a non-zero X or Y amount"
        } else {
            "deposit amounts are both zero"
        };
        return Err(DlmmError::InvalidDeposit { bin_id, reason });
    }
    if !position.accepts_x() && intent.x_amount().is_positive() {
        return Err(DlmmError::InvalidDeposit {
            bin_id,
            reason: "bins below the active bin accept only Y",
        });
    }
    if !position.accepts_y() && intent.y_amount().is_positive() {
        return Err(DlmmError::InvalidDeposit {
            bin_id,
            reason: "bins above the active bin accept only X",
        });
    }
    Ok(position)
}
