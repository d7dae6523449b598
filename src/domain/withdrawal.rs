//! Requested removal of liquidity from one bin.

use core::fmt;

use super::BinId;
use crate::constants::PERCENT_DENOMINATOR;
use crate::error::{DlmmError, Result};

/// Share of a position to withdraw, in whole percent (`0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithdrawalPercent(u32);

impl WithdrawalPercent {
    /// Withdraw nothing.
    pub const ZERO: Self = Self(0);

    /// Withdraw the whole position.
    pub const ALL: Self = Self(PERCENT_DENOMINATOR as u32);

    /// Creates a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidWithdrawalPercentage`] if `percent > 100`.
    pub const fn new(percent: u32) -> Result<Self> {
        if percent > Self::ALL.0 {
            return Err(DlmmError::InvalidWithdrawalPercentage(percent));
        }
        Ok(Self(percent))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for WithdrawalPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A withdrawal request for one bin.
///
/// `active_bin_id` is `None` when the caller does not know the pool's
/// active bin; the withdrawal calculator then falls back to 1/1 nominal
/// minimums instead of position-aware ones.
///
/// ```
/// use dlmm_liquidity::domain::{BinId, WithdrawalIntent};
///
/// let intent = WithdrawalIntent::new(BinId::new(12), 50, Some(BinId::new(10)));
/// assert!(intent.is_ok());
/// assert!(WithdrawalIntent::new(BinId::new(12), 101, None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalIntent {
    bin_id: BinId,
    percent: WithdrawalPercent,
    active_bin_id: Option<BinId>,
}

impl WithdrawalIntent {
    /// Creates a withdrawal intent.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidWithdrawalPercentage`] if `percent > 100`.
    pub fn new(bin_id: BinId, percent: u32, active_bin_id: Option<BinId>) -> Result<Self> {
        Ok(Self {
            bin_id,
            percent: WithdrawalPercent::new(percent)?,
            active_bin_id,
        })
    }

    /// Returns the target bin.
    #[must_use]
    pub const fn bin_id(&self) -> BinId {
        self.bin_id
    }

    /// Returns the requested percentage.
    #[must_use]
    pub const fn percent(&self) -> WithdrawalPercent {
        self.percent
    }

    /// Returns the pool's active bin, if known.
    #[must_use]
    pub const fn active_bin_id(&self) -> Option<BinId> {
        self.active_bin_id
    }

    /// Returns a copy with the active bin filled in.
    #[must_use]
    pub const fn with_active_bin(self, active_bin_id: BinId) -> Self {
        Self {
            active_bin_id: Some(active_bin_id),
            ..self
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(50)]
    #[case(100)]
    fn accepts_closed_range(#[case] pct: u32) {
        let Ok(p) = WithdrawalPercent::new(pct) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), pct);
    }

    #[rstest]
    #[case(101)]
    #[case(1_000)]
    #[case(u32::MAX)]
    fn rejects_above_one_hundred(#[case] pct: u32) {
        assert_eq!(
            WithdrawalPercent::new(pct),
            Err(DlmmError::InvalidWithdrawalPercentage(pct))
        );
    }

    #[test]
    fn active_bin_can_be_filled_later() {
        let Ok(intent) = WithdrawalIntent::new(BinId::new(3), 25, None) else {
            panic!("expected Ok");
        };
        assert_eq!(intent.active_bin_id(), None);
        let filled = intent.with_active_bin(BinId::new(1));
        assert_eq!(filled.active_bin_id(), Some(BinId::new(1)));
        assert_eq!(filled.percent(), intent.percent());
    }

    #[test]
    fn display() {
        assert_eq!(WithdrawalPercent::ALL.to_string(), "100%");
    }
}
