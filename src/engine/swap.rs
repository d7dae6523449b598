//! Minimum-output guard for swaps executed from routing quotes.

use crate::domain::{Amount, SlippageTolerance, SwapParams, SwapQuote};
use crate::error::Result;

/// Derives swap parameters from a routing quote.
///
/// The input is sent as quoted; the output bound is
/// `floor(amount_out × (1 − tolerance))`.
///
/// # Errors
///
/// Propagates arithmetic errors from the slippage scaling.
///
/// ```
/// use dlmm_liquidity::domain::{Amount, SlippageTolerance, SwapDirection, SwapQuote};
/// use dlmm_liquidity::engine::compute_swap_params;
///
/// let quote = SwapQuote::new(SwapDirection::XForY, Amount::new(1_000), Amount::new(2_017))
///     .expect("valid quote");
/// let params = compute_swap_params(&quote, SlippageTolerance::DEFAULT).expect("ok");
/// assert_eq!(params.min_amount_out(), Amount::new(1_996));
/// ```
pub fn compute_swap_params(quote: &SwapQuote, slippage: SlippageTolerance) -> Result<SwapParams> {
    let min_out = Amount::new(slippage.apply_floor(quote.amount_out().get())?);
    let params = SwapParams::new(quote.direction(), quote.amount_in(), min_out);
    log::debug!(
        "Swap quote {} -> {}: {params}",
        quote.amount_in(),
        quote.amount_out()
    );
    Ok(params)
}
