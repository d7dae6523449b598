//! Routing quotes and the swap parameters derived from them.

use core::fmt;

use super::Amount;
use crate::error::{DlmmError, Result};

/// Direction of a swap through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token X for token Y.
    XForY,
    /// Sell token Y for token X.
    YForX,
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XForY => write!(f, "X->Y"),
            Self::YForX => write!(f, "Y->X"),
        }
    }
}

/// A routing quote from the pool/quote service.
///
/// # Invariants
///
/// Both amounts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapQuote {
    /// Creates a validated quote.
    ///
    /// # Errors
    ///
    /// Returns [`DlmmError::InvalidQuote`] if either amount is zero.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(DlmmError::InvalidQuote("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(DlmmError::InvalidQuote("amount_out must be positive"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the quoted input.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the quoted output.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

/// Slippage-safe swap parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapParams {
    direction: SwapDirection,
    amount_in: Amount,
    min_amount_out: Amount,
}

impl SwapParams {
    /// Creates swap parameters.
    pub const fn new(direction: SwapDirection, amount_in: Amount, min_amount_out: Amount) -> Self {
        Self {
            direction,
            amount_in,
            min_amount_out,
        }
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the exact input to send.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum output the transaction accepts.
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }
}

impl fmt::Display for SwapParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({}, in={}, min_out={})",
            self.direction, self.amount_in, self.min_amount_out
        )
    }
}
