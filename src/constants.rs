//! Contract parameters mirrored from the on-chain DLMM core.
//!
//! These values are part of the contract surface.  They are authoritative
//! and must match the deployed contract exactly, so they are compile-time
//! constants rather than configuration.

/// Fixed-point scale of bin prices (1e8).
pub const PRICE_SCALE: u128 = 100_000_000;

/// Basis-point denominator for fee rates and slippage (1e4 = 100%).
pub const FEE_SCALE_BPS: u128 = 10_000;

/// Smallest bootstrap mint accepted by an empty bin.
pub const MINIMUM_BIN_SHARES: u128 = 10_000;

/// Shares permanently locked out of every bootstrap mint.
pub const MINIMUM_BURNT_SHARES: u128 = 1_000;

/// Denominator of withdrawal percentages.
pub const PERCENT_DENOMINATOR: u128 = 100;
