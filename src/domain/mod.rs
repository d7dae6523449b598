//! Value types of the DLMM liquidity domain.
//!
//! Bins, prices, shares, fee rates, user positions and the intents and
//! quotes exchanged with the surrounding automation.  Every type is a
//! plain value reconstructed per operation from external snapshots; the
//! engine never holds or mutates shared state.

mod amount;
mod basis_points;
mod bin_id;
mod bin_price;
mod bin_snapshot;
mod deposit;
mod fee_set;
mod position;
mod quote;
mod rounding;
mod shares;
mod slippage;
mod swap;
mod withdrawal;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use bin_id::{BinId, BinPosition};
pub use bin_price::BinPrice;
pub use bin_snapshot::BinSnapshot;
pub use deposit::DepositIntent;
pub use fee_set::PoolFeeSet;
pub use position::Position;
pub use quote::{MintQuote, WithdrawalQuote};
pub use rounding::Rounding;
pub use shares::Shares;
pub use slippage::SlippageTolerance;
pub use swap::{SwapDirection, SwapParams, SwapQuote};
pub use withdrawal::{WithdrawalIntent, WithdrawalPercent};
