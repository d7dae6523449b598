//! Per-pool liquidity fee rates.

use core::fmt;

use super::BasisPoints;
use crate::error::{DlmmError, Result};

/// The six fee rates a pool charges, one protocol/provider/variable
/// triple per token, each in basis points over a 1e4 scale.
///
/// Only the per-token sum matters to the active-bin fee adjustment, so
/// each side's sum is validated to stay at or below 100%.
///
/// ```
/// use dlmm_liquidity::domain::{BasisPoints, PoolFeeSet};
///
/// let fees = PoolFeeSet::symmetric(
///     BasisPoints::new(10),
///     BasisPoints::new(20),
///     BasisPoints::new(0),
/// )
/// .expect("valid fees");
/// assert_eq!(fees.x_liquidity_fee(), BasisPoints::new(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolFeeSet {
    x_protocol_fee: BasisPoints,
    x_provider_fee: BasisPoints,
    x_variable_fee: BasisPoints,
    y_protocol_fee: BasisPoints,
    y_provider_fee: BasisPoints,
    y_variable_fee: BasisPoints,
}

impl PoolFeeSet {
    /// A pool that charges no fees.
    pub const ZERO: Self = Self {
        x_protocol_fee: BasisPoints::ZERO,
        x_provider_fee: BasisPoints::ZERO,
        x_variable_fee: BasisPoints::ZERO,
        y_protocol_fee: BasisPoints::ZERO,
        y_provider_fee: BasisPoints::ZERO,
        y_variable_fee: BasisPoints::ZERO,
    };

    /// Creates a fee set from all six rates.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidFee`] if either token's total exceeds
    /// 10 000 bp.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_protocol_fee: BasisPoints,
        x_provider_fee: BasisPoints,
        x_variable_fee: BasisPoints,
        y_protocol_fee: BasisPoints,
        y_provider_fee: BasisPoints,
        y_variable_fee: BasisPoints,
    ) -> Result<Self> {
        let fees = Self {
            x_protocol_fee,
            x_provider_fee,
            x_variable_fee,
            y_protocol_fee,
            y_provider_fee,
            y_variable_fee,
        };
        fees.validate()?;
        Ok(fees)
    }

    /// Creates a fee set charging the same rates on both tokens.
    ///
    /// # Errors
    ///
    /// Same as [`PoolFeeSet::new`].
    pub fn symmetric(
        protocol_fee: BasisPoints,
        provider_fee: BasisPoints,
        variable_fee: BasisPoints,
    ) -> Result<Self> {
        Self::new(
            protocol_fee,
            provider_fee,
            variable_fee,
            protocol_fee,
            provider_fee,
            variable_fee,
        )
    }

    /// Validates both per-token totals.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidFee`] if a total exceeds 10 000 bp or
    /// overflows.
    pub fn validate(&self) -> Result<()> {
        let x = Self::total(self.x_fees())
            .ok_or(DlmmError::InvalidFee("token X fee total overflows"))?;
        if !x.is_valid_percent() {
            return Err(DlmmError::InvalidFee("token X fee total exceeds 100%"));
        }
        let y = Self::total(self.y_fees())
            .ok_or(DlmmError::InvalidFee("token Y fee total overflows"))?;
        if !y.is_valid_percent() {
            return Err(DlmmError::InvalidFee("token Y fee total exceeds 100%"));
        }
        Ok(())
    }

    /// Total rate charged on excess token X at the active bin.
    #[must_use]
    pub fn x_liquidity_fee(&self) -> BasisPoints {
        Self::total(self.x_fees())
            .unwrap_or(BasisPoints::MAX_PERCENT)
    }

    /// Total rate charged on excess token Y at the active bin.
    #[must_use]
    pub fn y_liquidity_fee(&self) -> BasisPoints {
        Self::total(self.y_fees())
            .unwrap_or(BasisPoints::MAX_PERCENT)
    }

    /// Returns the X-side `(protocol, provider, variable)` rates.
    #[must_use]
    pub const fn x_fees(&self) -> (BasisPoints, BasisPoints, BasisPoints) {
        (self.x_protocol_fee, self.x_provider_fee, self.x_variable_fee)
    }

    /// Returns the Y-side `(protocol, provider, variable)` rates.
    #[must_use]
    pub const fn y_fees(&self) -> (BasisPoints, BasisPoints, BasisPoints) {
        (self.y_protocol_fee, self.y_provider_fee, self.y_variable_fee)
    }

    fn total((a, b, c): (BasisPoints, BasisPoints, BasisPoints)) -> Option<BasisPoints> {
        a.checked_add(&b)?.checked_add(&c)
    }
}

impl fmt::Display for PoolFeeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolFeeSet(x={}, y={})",
            self.x_liquidity_fee(),
            self.y_liquidity_fee()
        )
    }
}
