//! Caller-side tolerances for liquidity and swap parameters.

use crate::domain::SlippageTolerance;
use crate::error::{DlmmError, Result};

/// Tolerances applied when deriving on-chain bounds.
///
/// # Defaults
///
/// - slippage tolerance: 1% (100 bp)
/// - minimum-received enforcement: on
///
/// # Validation
///
/// The slippage tolerance must not exceed 100%.  A tolerance of exactly
/// 100% is accepted but turns every computed minimum into zero.
///
/// # Deserialization
///
/// With the `serde` feature, the config reads from
/// `{"slippage_tolerance_bps": 50, "enforce_minimum_received": false}`;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLiquidityConfig"))]
pub struct LiquidityConfig {
    slippage_tolerance: SlippageTolerance,
    enforce_minimum_received: bool,
}

impl LiquidityConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidConfiguration`] if the tolerance exceeds
    /// 100%.
    pub fn new(
        slippage_tolerance: SlippageTolerance,
        enforce_minimum_received: bool,
    ) -> Result<Self> {
        let config = Self {
            slippage_tolerance,
            enforce_minimum_received,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration from a tolerance in basis points.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidConfiguration`] above 10 000 bp.
    pub fn from_bps(slippage_bps: u32, enforce_minimum_received: bool) -> Result<Self> {
        let slippage = SlippageTolerance::from_bps(slippage_bps)
            .map_err(|_| DlmmError::InvalidConfiguration("slippage tolerance exceeds 100%"))?;
        Self::new(slippage, enforce_minimum_received)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidConfiguration`] if the tolerance exceeds
    /// 100%.
    pub fn validate(&self) -> Result<()> {
        if !self.slippage_tolerance.bps().is_valid_percent() {
            return Err(DlmmError::InvalidConfiguration(
                "slippage tolerance exceeds 100%",
            ));
        }
        Ok(())
    }

    /// Returns the slippage tolerance.
    #[must_use]
    pub const fn slippage_tolerance(&self) -> SlippageTolerance {
        self.slippage_tolerance
    }

    /// Returns `true` if computed minimum-received bounds are enforced.
    #[must_use]
    pub const fn enforce_minimum_received(&self) -> bool {
        self.enforce_minimum_received
    }
}

impl Default for LiquidityConfig {
    fn default() -> Self {
        Self {
            slippage_tolerance: SlippageTolerance::DEFAULT,
            enforce_minimum_received: true,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawLiquidityConfig {
    slippage_tolerance_bps: u32,
    enforce_minimum_received: bool,
}

#[cfg(feature = "serde")]
impl Default for RawLiquidityConfig {
    fn default() -> Self {
        let config = LiquidityConfig::default();
        Self {
            slippage_tolerance_bps: config.slippage_tolerance.bps().get(),
            enforce_minimum_received: config.enforce_minimum_received,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawLiquidityConfig> for LiquidityConfig {
    type Error = DlmmError;

    fn try_from(raw: RawLiquidityConfig) -> Result<Self> {
        Self::from_bps(raw.slippage_tolerance_bps, raw.enforce_minimum_received)
    }
}
