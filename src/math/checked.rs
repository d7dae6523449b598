//! Fallible arithmetic for token and share quantities.
//!
//! The engine never saturates: a value that leaves the `u128` range is a
//! bug in the inputs, so it surfaces as a [`DlmmError`] instead of being
//! clamped into a plausible-looking parameter.

use crate::domain::{Amount, Shares};
use crate::error::DlmmError;

/// Checked arithmetic returning [`DlmmError`] on overflow or underflow.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::Overflow`] if the sum exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, DlmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::Underflow`] if `other > self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, DlmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, DlmmError> {
        self.checked_add(other)
            .ok_or(DlmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, DlmmError> {
        self.checked_sub(other)
            .ok_or(DlmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, DlmmError> {
        self.checked_add(other)
            .ok_or(DlmmError::Overflow("shares addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, DlmmError> {
        self.checked_sub(other)
            .ok_or(DlmmError::Underflow("shares subtraction underflow"))
    }
}
