//! Bin identifiers and a bin's side relative to the active bin.

use core::fmt;

/// Identifier of a discrete price bucket.
///
/// Bin ids are totally ordered and grow with price.  Bins below the
/// pool's active bin hold only token Y, bins above hold only token X, and
/// the active bin may hold both.
///
/// ```
/// use dlmm_liquidity::domain::{BinId, BinPosition};
///
/// let active = BinId::new(500);
/// assert_eq!(BinId::new(499).position_relative_to(active), BinPosition::Below);
/// assert_eq!(BinId::new(500).position_relative_to(active), BinPosition::Active);
/// assert_eq!(BinId::new(501).position_relative_to(active), BinPosition::Above);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BinId(i32);

impl BinId {
    /// Wraps a raw bin id.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw bin id.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Classifies this bin against the pool's active bin.
    #[must_use]
    pub const fn position_relative_to(&self, active: Self) -> BinPosition {
        if self.0 < active.0 {
            BinPosition::Below
        } else if self.0 > active.0 {
            BinPosition::Above
        } else {
            BinPosition::Active
        }
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BinId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Where a bin sits relative to the pool's active bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinPosition {
    /// Below the active bin: token Y only.
    Below,
    /// The active bin: either or both tokens.
    Active,
    /// Above the active bin: token X only.
    Above,
}

impl BinPosition {
    /// Returns `true` if the bin may hold token X.
    #[must_use]
    pub const fn accepts_x(&self) -> bool {
        matches!(self, Self::Active | Self::Above)
    }

    /// Returns `true` if the bin may hold token Y.
    #[must_use]
    pub const fn accepts_y(&self) -> bool {
        matches!(self, Self::Active | Self::Below)
    }

    /// Returns `true` for [`BinPosition::Active`].
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for BinPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below => write!(f, "Below"),
            Self::Active => write!(f, "Active"),
            Self::Above => write!(f, "Above"),
        }
    }
}
