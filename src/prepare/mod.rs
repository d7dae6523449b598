//! Bin Preparation Layer.
//!
//! Normalizes the bin, position and fee records fetched from the pool
//! service into the typed snapshots the [`engine`](crate::engine)
//! consumes, enforces deposit-side restrictions, and assembles per-bin
//! transaction parameters with the aggregate totals the submission layer
//! checks after execution.
//!
//! # Flow
//!
//! ```text
//! BinRecord / FeeRecord  ──FromRecord──▶ PoolSnapshot
//! PositionRecord         ──FromRecord──▶ Position
//! PoolSnapshot + intents ──plan_*──────▶ AddLiquidityPlan / WithdrawalPlan
//! ```

#[cfg(feature = "serde")]
mod deserialization;
mod planner;
mod pool_snapshot;
mod records;
mod validation;

pub use planner::{
    AddLiquidityPlan, BinBurnParams, BinMintParams, WithdrawalPlan, plan_add_liquidity,
    plan_swap, plan_withdrawal,
};
pub use pool_snapshot::PoolSnapshot;
pub use records::{BinRecord, FeeRecord, PositionRecord};
pub use validation::validate_deposit;
