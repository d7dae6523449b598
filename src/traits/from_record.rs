//! Generic construction trait for domain values built from raw records.
//!
//! Every snapshot type the calculators consume implements
//! `FromRecord<R>` for the record shape the pool service emits:
//!
//! ```text
//! BinRecord      => BinSnapshot::from_record(&record)
//! PositionRecord => Position::from_record(&record)
//! FeeRecord      => PoolFeeSet::from_record(&record)
//! ```
//!
//! # Validation Contract
//!
//! Implementations validate every invariant of the target type during
//! construction.  A value returned from `from_record` is safe to hand to
//! the engine without further checks.
//!
//! There is no blanket implementation; each record-type pairing is
//! written out explicitly.

use crate::error::Result;

/// Builds a validated domain value from a raw record of type `R`.
///
/// # Errors
///
/// Returns a validation variant of
/// [`DlmmError`](crate::error::DlmmError) if the record is unusable.
pub trait FromRecord<R> {
    /// Creates a new value from the given record.
    ///
    /// The record is taken by reference so callers can keep it for
    /// logging or retry.
    ///
    /// # Errors
    ///
    /// - [`DlmmError::InvalidPrice`](crate::error::DlmmError::InvalidPrice)
    ///   if a bin price is zero.
    /// - [`DlmmError::InvalidFee`](crate::error::DlmmError::InvalidFee)
    ///   if a fee total exceeds 100%.
    fn from_record(record: &R) -> Result<Self>
    where
        Self: Sized;
}
