//! Slippage tolerance applied to minimum-received bounds.

use core::fmt;

use super::{BasisPoints, Rounding};
use crate::constants::FEE_SCALE_BPS;
use crate::error::{DlmmError, Result};
use crate::math::mul_div;

/// Fraction of an expected value the caller is willing to give up, kept in
/// basis points so fractional percentages stay exact.
///
/// ```
/// use dlmm_liquidity::domain::SlippageTolerance;
///
/// let one_percent = SlippageTolerance::default();
/// assert_eq!(one_percent.apply_floor(999_000), Ok(989_010));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlippageTolerance(BasisPoints);

impl SlippageTolerance {
    /// No tolerance: minimums equal the expected values.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 1%, the default used by the automation.
    pub const DEFAULT: Self = Self(BasisPoints::new(100));

    /// Creates a tolerance from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidSlippage`] above 10 000 bp.
    pub const fn from_bps(bps: u32) -> Result<Self> {
        let bp = BasisPoints::new(bps);
        if !bp.is_valid_percent() {
            return Err(DlmmError::InvalidSlippage(bps));
        }
        Ok(Self(bp))
    }

    /// Creates a tolerance from whole percent (`0..=100`).
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidSlippage`] above 100%.
    pub const fn from_percent(percent: u32) -> Result<Self> {
        match percent.checked_mul(100) {
            Some(bps) => Self::from_bps(bps),
            None => Err(DlmmError::InvalidSlippage(u32::MAX)),
        }
    }

    /// Returns the tolerance in basis points.
    #[must_use]
    pub const fn bps(&self) -> BasisPoints {
        self.0
    }

    /// Scales `value` by `1 - tolerance`, truncating.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::Overflow`] only if the internal product cannot
    /// be represented, which does not happen for `u128` inputs.
    pub fn apply_floor(&self, value: u128) -> Result<u128> {
        let keep = self
            .0
            .complement()
            .ok_or(DlmmError::InvalidSlippage(self.0.get()))?;
        mul_div(value, u128::from(keep.get()), FEE_SCALE_BPS, Rounding::Down)
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SlippageTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0.get() / 100, self.0.get() % 100)
    }
}
