//! Burn amount and minimum-received bounds for withdrawing from a bin.

use core::cmp::Ordering;

use crate::constants::{FEE_SCALE_BPS, PERCENT_DENOMINATOR};
use crate::domain::{
    Amount, BinPosition, BinSnapshot, Rounding, Shares, SlippageTolerance, WithdrawalIntent,
    WithdrawalQuote,
};
use crate::error::{DlmmError, Result};
use crate::math::{mul_div, mul_div_many};

const ONE: Amount = Amount::new(1);

/// Computes the shares to burn and the minimum token amounts to accept.
///
/// - `shares_to_burn = floor(user_shares × percent / 100)`
/// - with `enforce_minimum_received`:
///   `min = floor(reserve × shares_to_burn × (1 − tolerance) / bin_shares)`
///   for each token, in a single rounding step.
///
/// When enforcement is off, or both minimums round to zero, nominal
/// one-unit minimums chosen from the bin's position are substituted so the
/// transaction's post-condition is never vacuous (see
/// [`fallback_minimums`]).
///
/// A user or bin holding no shares, or a burn that rounds to zero, yields
/// [`WithdrawalQuote::ZERO`].
///
/// # Errors
///
/// - [`DlmmError::BinMismatch`] if `intent` targets a different bin.
/// - [`DlmmError::InvalidPosition`] if `user_shares` exceeds the bin's
///   share supply.
/// - [`DlmmError::Overflow`] if `reserve × shares_to_burn × (1e4 − bps)`
///   exceeds 256 bits, which needs a reserve and a share supply both near
///   `u128::MAX`.
///
/// # Examples
///
/// ```
/// use dlmm_liquidity::domain::{
///     Amount, BinId, BinPrice, BinSnapshot, Shares, SlippageTolerance, WithdrawalIntent,
/// };
/// use dlmm_liquidity::engine::compute_withdrawal;
///
/// let bin = BinSnapshot::new(
///     BinId::new(0), BinPrice::PARITY, Amount::new(500), Amount::new(500), Shares::new(1_000),
/// );
/// let intent = WithdrawalIntent::new(BinId::new(0), 50, Some(BinId::new(0))).expect("valid");
/// let quote = compute_withdrawal(&bin, Shares::new(200), &intent, SlippageTolerance::DEFAULT, true)
///     .expect("valid withdrawal");
/// assert_eq!(quote.shares_to_burn(), Shares::new(100));
/// assert_eq!(quote.min_x_amount(), Amount::new(49));
/// assert_eq!(quote.min_y_amount(), Amount::new(49));
/// ```
pub fn compute_withdrawal(
    bin: &BinSnapshot,
    user_shares: Shares,
    intent: &WithdrawalIntent,
    slippage: SlippageTolerance,
    enforce_minimum_received: bool,
) -> Result<WithdrawalQuote> {
    if intent.bin_id() != bin.bin_id() {
        return Err(DlmmError::BinMismatch {
            intent: intent.bin_id().get(),
            snapshot: bin.bin_id().get(),
        });
    }

    let bin_shares = bin.liquidity();
    if user_shares.is_zero() || bin_shares.is_zero() {
        return Ok(WithdrawalQuote::ZERO);
    }
    if user_shares > bin_shares {
        return Err(DlmmError::InvalidPosition {
            bin_id: bin.bin_id().get(),
            reason: "user liquidity exceeds bin liquidity",
        });
    }

    let burn = mul_div(
        user_shares.get(),
        u128::from(intent.percent().get()),
        PERCENT_DENOMINATOR,
        Rounding::Down,
    )?;
    if burn == 0 {
        return Ok(WithdrawalQuote::ZERO);
    }

    let (mut min_x, mut min_y) = (Amount::ZERO, Amount::ZERO);
    if enforce_minimum_received {
        let keep = slippage
            .bps()
            .complement()
            .ok_or(DlmmError::InvalidSlippage(slippage.bps().get()))?;
        let keep = u128::from(keep.get());
        let denominators = [bin_shares.get(), FEE_SCALE_BPS];
        min_x = Amount::new(mul_div_many(
            &[bin.reserve_x().get(), burn, keep],
            &denominators,
            Rounding::Down,
        )?);
        min_y = Amount::new(mul_div_many(
            &[bin.reserve_y().get(), burn, keep],
            &denominators,
            Rounding::Down,
        )?);
    }

    if !enforce_minimum_received || (min_x.is_zero() && min_y.is_zero()) {
        (min_x, min_y) = fallback_minimums(bin, intent);
        log::debug!(
            "Bin {} withdrawal uses fallback minimums x={min_x}, y={min_y}",
            bin.bin_id()
        );
    }

    let quote = WithdrawalQuote::new(Shares::new(burn), min_x, min_y);
    log::debug!(
        "Bin {} withdraw {}: {quote}",
        bin.bin_id(),
        intent.percent()
    );
    Ok(quote)
}

/// Nominal `(min_x, min_y)` used when computed minimums are unavailable.
///
/// | Bin | Minimums |
/// |-----|----------|
/// | active bin unknown | 1 / 1 |
/// | above active (X only) | 1 / 0 |
/// | below active (Y only) | 0 / 1 |
/// | active, one reserve strictly larger | 1 on the larger side |
/// | active, both positive and equal | 1 / 1 |
/// | active, only one reserve positive | 1 on that side |
/// | active, both reserves zero | 1 / 1 |
#[must_use]
pub fn fallback_minimums(bin: &BinSnapshot, intent: &WithdrawalIntent) -> (Amount, Amount) {
    let Some(active) = intent.active_bin_id() else {
        return (ONE, ONE);
    };
    match bin.bin_id().position_relative_to(active) {
        BinPosition::Above => (ONE, Amount::ZERO),
        BinPosition::Below => (Amount::ZERO, ONE),
        BinPosition::Active => {
            let (x, y) = (bin.reserve_x(), bin.reserve_y());
            match (x.is_positive(), y.is_positive()) {
                (true, true) => match x.cmp(&y) {
                    Ordering::Greater => (ONE, Amount::ZERO),
                    Ordering::Less => (Amount::ZERO, ONE),
                    Ordering::Equal => (ONE, ONE),
                },
                (true, false) => (ONE, Amount::ZERO),
                (false, true) => (Amount::ZERO, ONE),
                (false, false) => (ONE, ONE),
            }
        }
    }
}
