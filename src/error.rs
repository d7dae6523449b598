//! Unified error type for the DLMM liquidity engine.
//!
//! Every fallible operation returns [`DlmmError`].  Variants fall into two
//! families: validation failures, raised before any computation proceeds
//! and fatal to that single operation, and arithmetic failures, raised when
//! a value leaves the representable range.  Degenerate inputs (empty bins,
//! zero balances) are not errors; the calculators handle them explicitly.

use thiserror::Error;

/// Errors produced by the bin math engine and the preparation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DlmmError {
    /// Withdrawal percentage outside `0..=100`.
    #[error("invalid withdrawal percentage {0}: expected 0..=100")]
    InvalidWithdrawalPercentage(u32),

    /// Slippage tolerance above 100%.
    #[error("invalid slippage tolerance {0}bp: expected at most 10000bp")]
    InvalidSlippage(u32),

    /// Deposit intent that violates the bin-side token restrictions.
    #[error("invalid deposit for bin {bin_id}: {reason}")]
    InvalidDeposit {
        /// Bin targeted by the deposit.
        bin_id: i32,
        /// Which restriction was violated.
        reason: &'static str,
    },

    /// An intent was paired with a snapshot of a different bin.
    #[error("intent targets bin {intent} but snapshot is for bin {snapshot}")]
    BinMismatch {
        /// Bin named by the intent.
        intent: i32,
        /// Bin described by the snapshot.
        snapshot: i32,
    },

    /// Referenced bin is absent from the supplied snapshot.
    #[error("bin {0} not found in pool snapshot")]
    BinNotFound(i32),

    /// The same bin appears twice where each bin must be unique.
    #[error("bin {0} appears more than once")]
    DuplicateBin(i32),

    /// Position data inconsistent with its bin.
    #[error("invalid position in bin {bin_id}: {reason}")]
    InvalidPosition {
        /// Bin holding the position.
        bin_id: i32,
        /// What is inconsistent.
        reason: &'static str,
    },

    /// Bin price is zero or otherwise unusable.
    #[error("invalid bin price: {0}")]
    InvalidPrice(&'static str),

    /// Pool fee set out of range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Routing quote unusable for a swap.
    #[error("invalid swap quote: {0}")]
    InvalidQuote(&'static str),

    /// Engine configuration out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl DlmmError {
    /// Returns `true` for malformed-input errors.
    ///
    /// These are raised before any computation and the caller must abandon
    /// or correct the operation.  Arithmetic errors return `false`.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::Overflow(_) | Self::Underflow(_) | Self::DivisionByZero
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, DlmmError>;
