//! Fixed-point bin price.

use core::fmt;

use super::Amount;
use crate::constants::PRICE_SCALE;
use crate::error::{DlmmError, Result};

/// Price of token X in token Y, scaled by [`PRICE_SCALE`] (1e8).
///
/// A bin's price is fixed for the lifetime of the pool version, and is
/// always non-zero: a zero price would make token X worthless in the
/// liquidity-value formula.
///
/// ```
/// use dlmm_liquidity::domain::BinPrice;
///
/// let parity = BinPrice::new(100_000_000);
/// assert!(parity.is_ok());
/// assert!(BinPrice::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinPrice(u128);

impl BinPrice {
    /// Price of exactly 1.0 (one unit of X per unit of Y).
    pub const PARITY: Self = Self(PRICE_SCALE);

    /// Creates a price from its raw 1e8-scaled value.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidPrice`] if `raw` is zero.
    pub const fn new(raw: u128) -> Result<Self> {
        if raw == 0 {
            return Err(DlmmError::InvalidPrice("bin price must be non-zero"));
        }
        Ok(Self(raw))
    }

    /// Returns the raw 1e8-scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Liquidity value of a token pair in the common unit of the contract:
    /// `price * x + y * PRICE_SCALE`.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::Overflow`] if the value exceeds `u128`.
    pub fn liquidity_value(&self, x: Amount, y: Amount) -> Result<u128> {
        let x_value = self
            .0
            .checked_mul(x.get())
            .ok_or(DlmmError::Overflow("x liquidity value overflow"))?;
        let y_value = y
            .get()
            .checked_mul(PRICE_SCALE)
            .ok_or(DlmmError::Overflow("y liquidity value overflow"))?;
        x_value
            .checked_add(y_value)
            .ok_or(DlmmError::Overflow("liquidity value overflow"))
    }
}

impl fmt::Display for BinPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PRICE_SCALE;
        let frac = self.0 % PRICE_SCALE;
        write!(f, "{whole}.{frac:08}")
    }
}
