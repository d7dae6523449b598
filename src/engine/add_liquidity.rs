//! Minimum-share calculation for adding liquidity to a bin.
//!
//! Mirrors the contract's mint accounting so the `min-dlp` bound handed
//! on-chain is exactly what the contract would mint at the snapshot state,
//! less the caller's slippage tolerance.
//!
//! # Algorithm
//!
//! 1. `deposit_value = price × x + y × 1e8` and likewise for the bin's
//!    reserves.
//! 2. Pre-fee shares: `isqrt(deposit_value)` if the bin has no shares or
//!    no value, else `deposit_value × bin_shares / bin_value`.
//! 3. Active bin only: a deposit skewed against the bin's reserve ratio
//!    pays the liquidity fee on its excess token.
//! 4. Shares are recomputed from the post-fee deposit with the rule of
//!    step 2.
//! 5. Empty bins: the square-root seed must reach
//!    [`MINIMUM_BIN_SHARES`], and [`MINIMUM_BURNT_SHARES`] of it are
//!    locked forever.
//! 6. `min_shares = floor(expected × (1 − tolerance))`.

use crate::constants::{MINIMUM_BIN_SHARES, MINIMUM_BURNT_SHARES};
use crate::domain::{
    Amount, BasisPoints, BinSnapshot, DepositIntent, MintQuote, PoolFeeSet, Rounding, Shares,
    SlippageTolerance,
};
use crate::error::{DlmmError, Result};
use crate::math::{CheckedArithmetic, isqrt, mul_div};

/// Computes the shares a deposit mints and the active-bin fee it pays.
///
/// `is_active_bin` must be `true` exactly when `bin` is the pool's active
/// bin; only then is the rebalancing fee charged.
///
/// # Errors
///
/// - [`DlmmError::BinMismatch`] if `deposit` targets a different bin.
/// - [`DlmmError::Overflow`] if a liquidity value exceeds `u128`.
///
/// # Examples
///
/// ```
/// use dlmm_liquidity::domain::{
///     Amount, BinId, BinPrice, BinSnapshot, DepositIntent, PoolFeeSet, Shares,
///     SlippageTolerance,
/// };
/// use dlmm_liquidity::engine::compute_minted_shares;
///
/// let bin = BinSnapshot::new(
///     BinId::new(0), BinPrice::PARITY, Amount::ZERO, Amount::ZERO, Shares::ZERO,
/// );
/// let deposit = DepositIntent::x_only(BinId::new(0), Amount::new(10_000));
/// let quote = compute_minted_shares(
///     &bin, &deposit, true, &PoolFeeSet::ZERO, SlippageTolerance::ZERO,
/// )
/// .expect("valid deposit");
/// assert_eq!(quote.expected_shares(), Shares::new(999_000));
/// ```
pub fn compute_minted_shares(
    bin: &BinSnapshot,
    deposit: &DepositIntent,
    is_active_bin: bool,
    fees: &PoolFeeSet,
    slippage: SlippageTolerance,
) -> Result<MintQuote> {
    if deposit.bin_id() != bin.bin_id() {
        return Err(DlmmError::BinMismatch {
            intent: deposit.bin_id().get(),
            snapshot: bin.bin_id().get(),
        });
    }

    let price = bin.price();
    let bin_shares = bin.liquidity().get();
    let bin_value = bin.liquidity_value()?;
    let x_amount = deposit.x_amount();
    let y_amount = deposit.y_amount();

    let deposit_value = price.liquidity_value(x_amount, y_amount)?;
    let dlp = shares_for_value(deposit_value, bin_shares, bin_value)?;

    let (x_fee, y_fee) = if is_active_bin && dlp > 0 {
        active_bin_fees(bin, x_amount, y_amount, dlp, fees)?
    } else {
        (Amount::ZERO, Amount::ZERO)
    };

    let x_post_fees = x_amount.safe_sub(&x_fee)?;
    let y_post_fees = y_amount.safe_sub(&y_fee)?;
    let value_post_fees = price.liquidity_value(x_post_fees, y_post_fees)?;
    let dlp_post_fees = shares_for_value(value_post_fees, bin_shares, bin_value)?;

    let expected = if bin.has_no_shares() {
        if dlp_post_fees >= MINIMUM_BIN_SHARES {
            dlp_post_fees - MINIMUM_BURNT_SHARES
        } else {
            log::warn!(
                "Bin {} bootstrap seeds {dlp_post_fees} shares, below {MINIMUM_BIN_SHARES}",
                bin.bin_id()
            );
            0
        }
    } else {
        dlp_post_fees
    };

    let min_shares = Shares::new(slippage.apply_floor(expected)?);
    let quote = MintQuote::new(Shares::new(expected), min_shares, x_fee, y_fee);
    log::debug!("Bin {} deposit {deposit}: {quote}", bin.bin_id());
    Ok(quote)
}

/// Shares for `value` at a bin: proportional to existing shares, or the
/// square-root seed when the bin has no shares or no value.
fn shares_for_value(value: u128, bin_shares: u128, bin_value: u128) -> Result<u128> {
    if bin_shares == 0 || bin_value == 0 {
        return Ok(isqrt(value));
    }
    mul_div(value, bin_shares, bin_value, Rounding::Down)
}

/// Fee charged on the over-supplied token of an active-bin deposit.
///
/// The deposit is compared with what `dlp` freshly minted shares could
/// withdraw from the post-deposit bin.  When one token is over-supplied
/// while the other is under-supplied, the excess pays that token's total
/// fee rate, rounded up and capped at the deposited amount.  Comparisons
/// are strict; a deposit exactly on the boundary pays nothing.
fn active_bin_fees(
    bin: &BinSnapshot,
    x_amount: Amount,
    y_amount: Amount,
    dlp: u128,
    fees: &PoolFeeSet,
) -> Result<(Amount, Amount)> {
    let total_shares = bin
        .liquidity()
        .get()
        .checked_add(dlp)
        .ok_or(DlmmError::Overflow("post-deposit share supply overflow"))?;
    let x_balance = bin.reserve_x().safe_add(&x_amount)?;
    let y_balance = bin.reserve_y().safe_add(&y_amount)?;

    let share_of = |balance: Amount| -> Result<Amount> {
        Ok(Amount::new(mul_div(dlp, balance.get(), total_shares, Rounding::Down)?))
    };
    let x_withdrawable = share_of(x_balance)?;
    let y_withdrawable = share_of(y_balance)?;
    log::trace!(
        "Bin {} withdrawable for {dlp} shares: x={x_withdrawable}, y={y_withdrawable}",
        bin.bin_id()
    );

    let x_fee = if y_withdrawable > y_amount && x_amount > x_withdrawable {
        fee_on_excess(
            x_amount.safe_sub(&x_withdrawable)?,
            fees.x_liquidity_fee(),
            x_amount,
        )?
    } else {
        Amount::ZERO
    };

    let y_fee = if x_withdrawable > x_amount && y_amount > y_withdrawable {
        fee_on_excess(
            y_amount.safe_sub(&y_withdrawable)?,
            fees.y_liquidity_fee(),
            y_amount,
        )?
    } else {
        Amount::ZERO
    };

    Ok((x_fee, y_fee))
}

fn fee_on_excess(excess: Amount, rate: BasisPoints, deposited: Amount) -> Result<Amount> {
    Ok(rate.apply(excess, Rounding::Up)?.min(deposited))
}
