//! A user's share balance in one bin.

use core::fmt;

use super::{BinId, Shares};

/// User liquidity held in a single bin.
///
/// `has_held_shares` records whether the user ever held a non-zero balance
/// in the bin.  The engine does not use it; it is carried through to the
/// transaction layer, which decides from it whether an ownership-transfer
/// condition must accompany the transaction.
///
/// # Invariants
///
/// A non-zero balance always implies `has_held_shares`.
///
/// ```
/// use dlmm_liquidity::domain::{BinId, Position, Shares};
///
/// let pos = Position::new(BinId::new(4), Shares::new(200), false);
/// assert!(pos.has_held_shares());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    bin_id: BinId,
    user_liquidity: Shares,
    has_held_shares: bool,
}

impl Position {
    /// Creates a position.
    pub const fn new(bin_id: BinId, user_liquidity: Shares, has_held_shares: bool) -> Self {
        Self {
            bin_id,
            user_liquidity,
            has_held_shares: has_held_shares || !user_liquidity.is_zero(),
        }
    }

    /// Returns the bin holding the position.
    #[must_use]
    pub const fn bin_id(&self) -> BinId {
        self.bin_id
    }

    /// Returns the user's share balance.
    pub const fn user_liquidity(&self) -> Shares {
        self.user_liquidity
    }

    /// Returns `true` if the user has ever held shares in this bin.
    #[must_use]
    pub const fn has_held_shares(&self) -> bool {
        self.has_held_shares
    }

    /// Returns `true` if a transaction touching this bin must carry an
    /// ownership-transfer condition.
    #[must_use]
    pub const fn requires_ownership_condition(&self) -> bool {
        self.has_held_shares
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(bin={}, {})", self.bin_id, self.user_liquidity)
    }
}
