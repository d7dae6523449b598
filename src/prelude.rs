//! Convenience re-exports for common types and functions.
//!
//! ```rust
//! use dlmm_liquidity::prelude::*;
//! ```

pub use crate::config::LiquidityConfig;
pub use crate::domain::{
    Amount, BasisPoints, BinId, BinPosition, BinPrice, BinSnapshot, DepositIntent, MintQuote,
    PoolFeeSet, Position, Rounding, Shares, SlippageTolerance, SwapDirection, SwapParams,
    SwapQuote, WithdrawalIntent, WithdrawalPercent, WithdrawalQuote,
};
pub use crate::engine::{compute_minted_shares, compute_swap_params, compute_withdrawal};
pub use crate::error::{DlmmError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::prepare::{
    AddLiquidityPlan, PoolSnapshot, WithdrawalPlan, plan_add_liquidity, plan_swap,
    plan_withdrawal, validate_deposit,
};
pub use crate::traits::FromRecord;
