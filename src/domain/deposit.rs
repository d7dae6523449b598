//! Proposed addition of tokens to one bin.

use core::fmt;

use super::{Amount, BinId};

/// A deposit of token X and/or token Y into a single bin.
///
/// Which side may be non-zero depends on where the bin sits relative to
/// the active bin; that check needs the pool's active bin id and is
/// performed by [`validate_deposit`](crate::prepare::validate_deposit)
/// before the intent reaches the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositIntent {
    bin_id: BinId,
    x_amount: Amount,
    y_amount: Amount,
}

impl DepositIntent {
    /// Creates a deposit intent.
    pub const fn new(bin_id: BinId, x_amount: Amount, y_amount: Amount) -> Self {
        Self {
            bin_id,
            x_amount,
            y_amount,
        }
    }

    /// Deposit of token X only (bins above the active bin).
    pub const fn x_only(bin_id: BinId, x_amount: Amount) -> Self {
        Self::new(bin_id, x_amount, Amount::ZERO)
    }

    /// Deposit of token Y only (bins below the active bin).
    pub const fn y_only(bin_id: BinId, y_amount: Amount) -> Self {
        Self::new(bin_id, Amount::ZERO, y_amount)
    }

    /// Returns the target bin.
    #[must_use]
    pub const fn bin_id(&self) -> BinId {
        self.bin_id
    }

    /// Returns the token X amount.
    pub const fn x_amount(&self) -> Amount {
        self.x_amount
    }

    /// Returns the token Y amount.
    pub const fn y_amount(&self) -> Amount {
        self.y_amount
    }

    /// Returns `true` if neither token is deposited.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x_amount.is_zero() && self.y_amount.is_zero()
    }
}

impl fmt::Display for DepositIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(bin={}, x={}, y={})",
            self.bin_id, self.x_amount, self.y_amount
        )
    }
}
