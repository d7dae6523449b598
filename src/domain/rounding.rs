//! Rounding direction for integer division.

/// Direction applied when an integer division leaves a remainder.
///
/// The engine never divides without naming a direction: minimum bounds
/// round [`Down`](Self::Down) so the on-chain check cannot fail on a
/// rounding unit, fee allowances round [`Up`](Self::Up) so the contract's
/// deduction always fits inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling: toward positive infinity.
    Up,
    /// Floor: toward zero.
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` for [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
