//! Integer arithmetic with explicit rounding for the bin math engine.
//!
//! The on-chain contract works in unsigned integers and truncates every
//! division.  The off-chain shadow must land on the same integers, so
//! nothing here touches floating point:
//!
//! - [`mul_div`] / [`mul_div_many`]: products evaluated in 256 bits, then
//!   divided once, so a chain of factors is rounded a single time.
//! - [`isqrt`]: floor square root used to seed empty bins.
//! - [`CheckedArithmetic`]: fallible add/sub for domain newtypes.
//!
//! # Rounding convention
//!
//! Round toward the caller's safety on every value handed on-chain:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Minimum shares / minimum tokens out | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Fee liquidity the caller must accept | [`Rounding::Up`](crate::domain::Rounding::Up) |
//! | Intermediate contract divisions | [`Rounding::Down`](crate::domain::Rounding::Down) |

mod checked;
mod mul_div;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use mul_div::{mul_div, mul_div_many};
pub use sqrt::isqrt;
