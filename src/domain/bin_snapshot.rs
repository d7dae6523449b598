//! Point-in-time state of one bin.

use core::fmt;

use super::{Amount, BinId, BinPrice, Shares};
use crate::error::Result;

/// Reserves and share supply of a bin, as fetched from the pool service.
///
/// Every field is mandatory; an empty bin is expressed with zero reserves
/// and zero shares, never with missing data.  Snapshots are rebuilt for
/// each operation and never mutated by the engine.
///
/// ```
/// use dlmm_liquidity::domain::{Amount, BinId, BinPrice, BinSnapshot, Shares};
///
/// let bin = BinSnapshot::new(
///     BinId::new(0),
///     BinPrice::PARITY,
///     Amount::new(500),
///     Amount::new(500),
///     Shares::new(1_000),
/// );
/// assert_eq!(bin.liquidity_value(), Ok(100_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinSnapshot {
    bin_id: BinId,
    price: BinPrice,
    reserve_x: Amount,
    reserve_y: Amount,
    liquidity: Shares,
}

impl BinSnapshot {
    /// Creates a snapshot.
    pub const fn new(
        bin_id: BinId,
        price: BinPrice,
        reserve_x: Amount,
        reserve_y: Amount,
        liquidity: Shares,
    ) -> Self {
        Self {
            bin_id,
            price,
            reserve_x,
            reserve_y,
            liquidity,
        }
    }

    /// Returns the bin id.
    #[must_use]
    pub const fn bin_id(&self) -> BinId {
        self.bin_id
    }

    /// Returns the 1e8-scaled bin price.
    #[must_use]
    pub const fn price(&self) -> BinPrice {
        self.price
    }

    /// Returns the token X reserve.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the token Y reserve.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the bin's total share supply.
    pub const fn liquidity(&self) -> Shares {
        self.liquidity
    }

    /// Returns `true` if the bin has never issued shares (or all were burnt).
    #[must_use]
    pub const fn has_no_shares(&self) -> bool {
        self.liquidity.is_zero()
    }

    /// Value of the bin's reserves: `price * reserve_x + reserve_y * 1e8`.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::Overflow`](crate::error::DlmmError::Overflow)
    /// if the value exceeds `u128`.
    pub fn liquidity_value(&self) -> Result<u128> {
        self.price.liquidity_value(self.reserve_x, self.reserve_y)
    }
}

impl fmt::Display for BinSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bin({} @ {}, x={}, y={}, shares={})",
            self.bin_id, self.price, self.reserve_x, self.reserve_y, self.liquidity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bin() {
        let bin = BinSnapshot::new(
            BinId::new(7),
            BinPrice::PARITY,
            Amount::ZERO,
            Amount::ZERO,
            Shares::ZERO,
        );
        assert!(bin.has_no_shares());
        assert_eq!(bin.liquidity_value(), Ok(0));
    }

    #[test]
    fn display() {
        let bin = BinSnapshot::new(
            BinId::new(-2),
            BinPrice::PARITY,
            Amount::new(1),
            Amount::new(2),
            Shares::new(3),
        );
        assert_eq!(
            bin.to_string(),
            "Bin(-2 @ 1.00000000, x=1, y=2, shares=3 DLP)"
        );
    }
}
