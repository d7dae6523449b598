//! Basis-point rates over the contract's 1e4 fee scale.

use core::fmt;

use super::{Amount, Rounding};
use crate::constants::FEE_SCALE_BPS;
use crate::error::{DlmmError, Result};
use crate::math::mul_div;

/// A rate in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Fee rates and slippage tolerances share this representation so that
/// every percentage in the engine is an exact integer over
/// [`FEE_SCALE_BPS`].
///
/// ```
/// use dlmm_liquidity::domain::{Amount, BasisPoints, Rounding};
///
/// let fee = BasisPoints::new(30);
/// assert_eq!(fee.apply(Amount::new(1_000), Rounding::Up), Ok(Amount::new(3)));
/// assert_eq!(fee.apply(Amount::new(10), Rounding::Down), Ok(Amount::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(FEE_SCALE_BPS as u32);

    /// Wraps a raw basis-point value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= Self::MAX_PERCENT.0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns `10_000 - self`, or `None` if the rate exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match Self::MAX_PERCENT.0.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::Overflow`] if the result does not fit `u128`.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(amount.get(), u128::from(self.0), FEE_SCALE_BPS, rounding)
            .map(Amount::new)
            .map_err(|_| DlmmError::Overflow("basis points apply overflow"))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn bounds() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement() {
        assert_eq!(
            BasisPoints::new(100).complement(),
            Some(BasisPoints::new(9_900))
        );
        assert_eq!(
            BasisPoints::MAX_PERCENT.complement(),
            Some(BasisPoints::ZERO)
        );
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[rstest]
    #[case(30, 1_000, Rounding::Up, 3)]
    #[case(30, 1_001, Rounding::Down, 3)]
    #[case(30, 1_001, Rounding::Up, 4)]
    #[case(0, 1_000_000, Rounding::Up, 0)]
    #[case(10_000, 777, Rounding::Down, 777)]
    fn apply_rounds(
        #[case] bps: u32,
        #[case] amount: u128,
        #[case] rounding: Rounding,
        #[case] expected: u128,
    ) {
        let Ok(fee) = BasisPoints::new(bps).apply(Amount::new(amount), rounding) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, Amount::new(expected));
    }

    #[test]
    fn apply_to_max_amount_does_not_overflow_intermediate() {
        let Ok(half) = BasisPoints::new(5_000).apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(half, Amount::new(u128::MAX / 2));
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(25).to_string(), "25bp");
    }
}
