//! Per-bin parameters produced by the calculators.
//!
//! These values are embedded verbatim as integer transaction parameters by
//! the submission layer, so they carry no behaviour beyond accessors.

use core::fmt;

use super::{Amount, Shares};

/// Result of the add-liquidity share calculation for one bin.
///
/// - `expected_shares`: shares the contract should mint at the snapshot
///   state (after fees and the bootstrap burn).
/// - `min_shares`: `expected_shares` scaled down by the slippage
///   tolerance; the on-chain minimum-DLP bound.
/// - `x_fee_liquidity` / `y_fee_liquidity`: active-bin fee deductions,
///   rounded up, never above the deposited amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MintQuote {
    expected_shares: Shares,
    min_shares: Shares,
    x_fee_liquidity: Amount,
    y_fee_liquidity: Amount,
}

impl MintQuote {
    /// A quote minting nothing.
    pub const ZERO: Self = Self {
        expected_shares: Shares::ZERO,
        min_shares: Shares::ZERO,
        x_fee_liquidity: Amount::ZERO,
        y_fee_liquidity: Amount::ZERO,
    };

    /// Creates a quote.
    pub const fn new(
        expected_shares: Shares,
        min_shares: Shares,
        x_fee_liquidity: Amount,
        y_fee_liquidity: Amount,
    ) -> Self {
        Self {
            expected_shares,
            min_shares,
            x_fee_liquidity,
            y_fee_liquidity,
        }
    }

    /// Shares expected at the snapshot state, before slippage.
    pub const fn expected_shares(&self) -> Shares {
        self.expected_shares
    }

    /// Minimum acceptable shares (the on-chain `min-dlp` bound).
    pub const fn min_shares(&self) -> Shares {
        self.min_shares
    }

    /// Token X fee deducted at the active bin.
    pub const fn x_fee_liquidity(&self) -> Amount {
        self.x_fee_liquidity
    }

    /// Token Y fee deducted at the active bin.
    pub const fn y_fee_liquidity(&self) -> Amount {
        self.y_fee_liquidity
    }

    /// Returns `true` if no shares would be minted.
    #[must_use]
    pub const fn mints_nothing(&self) -> bool {
        self.expected_shares.is_zero()
    }
}

impl fmt::Display for MintQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MintQuote(expected={}, min={}, x_fee={}, y_fee={})",
            self.expected_shares, self.min_shares, self.x_fee_liquidity, self.y_fee_liquidity
        )
    }
}

/// Result of the withdrawal calculation for one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WithdrawalQuote {
    shares_to_burn: Shares,
    min_x_amount: Amount,
    min_y_amount: Amount,
}

impl WithdrawalQuote {
    /// The no-op triple.
    pub const ZERO: Self = Self {
        shares_to_burn: Shares::ZERO,
        min_x_amount: Amount::ZERO,
        min_y_amount: Amount::ZERO,
    };

    /// Creates a quote.
    pub const fn new(shares_to_burn: Shares, min_x_amount: Amount, min_y_amount: Amount) -> Self {
        Self {
            shares_to_burn,
            min_x_amount,
            min_y_amount,
        }
    }

    /// Shares to burn.
    pub const fn shares_to_burn(&self) -> Shares {
        self.shares_to_burn
    }

    /// Minimum token X to receive.
    pub const fn min_x_amount(&self) -> Amount {
        self.min_x_amount
    }

    /// Minimum token Y to receive.
    pub const fn min_y_amount(&self) -> Amount {
        self.min_y_amount
    }

    /// Returns `true` if nothing would be burnt.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.shares_to_burn.is_zero()
    }
}

impl fmt::Display for WithdrawalQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WithdrawalQuote(burn={}, min_x={}, min_y={})",
            self.shares_to_burn, self.min_x_amount, self.min_y_amount
        )
    }
}
