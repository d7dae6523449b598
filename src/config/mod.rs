//! Engine configuration.
//!
//! Only caller preferences live here.  Contract parameters (scales,
//! minimum shares) are compile-time [`constants`](crate::constants) and
//! cannot be overridden.

mod liquidity_config;

pub use liquidity_config::LiquidityConfig;
