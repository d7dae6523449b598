//! Floor integer square root.

/// Returns `floor(sqrt(n))`.
///
/// Empty bins are seeded with the square root of the deposit value; the
/// contract truncates, so this does too.
///
/// ```
/// use dlmm_liquidity::math::isqrt;
///
/// assert_eq!(isqrt(1_000_000_000_000), 1_000_000);
/// assert_eq!(isqrt(99), 9);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    n.isqrt()
}
