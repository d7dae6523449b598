//! Multiply-then-divide through a 256-bit intermediate.
//!
//! Reserve × shares × basis-point products exceed `u128` for realistic
//! pools, and dividing early would round twice.  Both functions compute
//! the full product first and round exactly once.

use crate::domain::Rounding;
use crate::error::{DlmmError, Result};

mod wide {
    #![allow(clippy::all, clippy::pedantic, missing_docs)]

    uint::construct_uint! {
        pub(crate) struct U256(4);
    }
}

use wide::U256;

/// Computes `a * b / denominator` with a single rounding step.
///
/// # Errors
///
/// - [`DlmmError::DivisionByZero`] if `denominator` is zero.
/// - [`DlmmError::Overflow`] if the quotient does not fit in `u128`.
///
/// ```
/// use dlmm_liquidity::domain::Rounding;
/// use dlmm_liquidity::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 10, 20, Rounding::Down), Ok(u128::MAX / 2));
/// assert_eq!(mul_div(7, 3, 2, Rounding::Up), Ok(11));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    mul_div_many(&[a, b], &[denominator], rounding)
}

/// Computes `Π numerators / Π denominators` with a single rounding step.
///
/// An empty slice contributes a factor of one.
///
/// # Errors
///
/// - [`DlmmError::DivisionByZero`] if any denominator is zero.
/// - [`DlmmError::Overflow`] if either product exceeds 256 bits or the
///   quotient does not fit in `u128`.
pub fn mul_div_many(
    numerators: &[u128],
    denominators: &[u128],
    rounding: Rounding,
) -> Result<u128> {
    let numerator = product(numerators)?;
    let denominator = product(denominators)?;
    if denominator.is_zero() {
        return Err(DlmmError::DivisionByZero);
    }

    let (quotient, remainder) = numerator.div_mod(denominator);
    let quotient = match rounding {
        Rounding::Up if !remainder.is_zero() => quotient
            .checked_add(U256::one())
            .ok_or(DlmmError::Overflow("mul_div ceiling overflow"))?,
        _ => quotient,
    };

    if quotient > U256::from(u128::MAX) {
        return Err(DlmmError::Overflow("mul_div result exceeds u128"));
    }
    Ok(quotient.as_u128())
}

fn product(factors: &[u128]) -> Result<U256> {
    factors.iter().try_fold(U256::one(), |acc, &factor| {
        acc.checked_mul(U256::from(factor))
            .ok_or(DlmmError::Overflow("mul_div intermediate exceeds 256 bits"))
    })
}
