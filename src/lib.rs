//! # DLMM Liquidity
//!
//! Off-chain shadow of a Discrete Liquidity Market Maker's per-bin
//! accounting.  Given a snapshot of a bin and a caller's intent, it
//! computes the integer parameters a liquidity transaction must carry:
//! how many DLP shares a deposit mints (and the minimum the contract must
//! honour), how many shares a withdrawal burns, and the minimum tokens
//! received in return.
//!
//! Every result reproduces the contract's floor/ceiling choices exactly.
//! Nothing here signs, submits or fetches; records come in as plain
//! snapshots and parameters go out as plain integers.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | Deserialize pool service records and [`LiquidityConfig`](config::LiquidityConfig) |
//!
//! # Quick Start
//!
//! ```rust
//! use dlmm_liquidity::config::LiquidityConfig;
//! use dlmm_liquidity::domain::{
//!     Amount, BinId, BinPrice, BinSnapshot, DepositIntent, PoolFeeSet, Shares,
//! };
//! use dlmm_liquidity::prepare::{PoolSnapshot, plan_add_liquidity};
//!
//! // 1. Snapshot the pool: an empty active bin at parity
//! let mut pool = PoolSnapshot::new(BinId::new(0), PoolFeeSet::ZERO);
//! pool.insert(BinSnapshot::new(
//!     BinId::new(0), BinPrice::PARITY, Amount::ZERO, Amount::ZERO, Shares::ZERO,
//! ))
//! .expect("unique bin");
//!
//! // 2. Seed it with 10 000 units of X
//! let intents = [DepositIntent::x_only(BinId::new(0), Amount::new(10_000))];
//! let plan = plan_add_liquidity(&pool, &intents, &LiquidityConfig::default())
//!     .expect("valid deposit");
//!
//! // sqrt(1e8 * 10 000) = 1 000 000, minus the 1 000 burnt, minus 1% slippage
//! assert_eq!(plan.bins[0].min_dlp, Shares::new(989_010));
//! assert_eq!(plan.total_x, Amount::new(10_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ Pool service  │  BinRecord, PositionRecord, FeeRecord
//! └──────┬───────┘
//!        │ FromRecord
//!        ▼
//! ┌──────────────┐
//! │   Prepare     │  PoolSnapshot, validate_deposit, plan_*
//! └──────┬───────┘
//!        │ one bin at a time
//!        ▼
//! ┌──────────────┐
//! │    Engine     │  compute_minted_shares, compute_withdrawal
//! └──────┬───────┘
//!        │ mul_div, isqrt
//!        ▼
//! ┌──────────────┐
//! │  Math/Domain  │  Amount, Shares, BinPrice, BasisPoints, ...
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`BinSnapshot`](domain::BinSnapshot), [`DepositIntent`](domain::DepositIntent), [`WithdrawalIntent`](domain::WithdrawalIntent), quotes |
//! | [`engine`] | Per-bin calculators |
//! | [`prepare`] | Record normalization, deposit validation, multi-bin plans |
//! | [`config`] | [`LiquidityConfig`](config::LiquidityConfig) caller tolerances |
//! | [`traits`] | [`FromRecord`](traits::FromRecord) construction seam |
//! | [`math`] | 256-bit `mul_div`, rounding division, integer square root |
//! | [`constants`] | Contract scales and minimum-share rules |
//! | [`error`] | [`DlmmError`](error::DlmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod constants;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod prepare;
pub mod traits;
