//! The bin liquidity math engine.
//!
//! Pure functions reproducing the contract's integer accounting for one
//! bin at a time.  Calls are independent: bins may be evaluated in any
//! order or in parallel, and no call performs I/O or touches shared state.
//!
//! | Function | Produces |
//! |----------|----------|
//! | [`compute_minted_shares`] | minimum DLP to mint and active-bin fee liquidity |
//! | [`compute_withdrawal`] | shares to burn and minimum X/Y to receive |
//! | [`compute_swap_params`] | minimum output for a routed swap |

mod add_liquidity;
mod swap;
mod withdraw_liquidity;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use add_liquidity::compute_minted_shares;
pub use swap::compute_swap_params;
pub use withdraw_liquidity::{compute_withdrawal, fallback_minimums};
