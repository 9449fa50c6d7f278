//! Integer helpers shared by the width computation and the constructors.

/// Compute the ceiling of the square root of `v`.
///
/// Returns the smallest `m` such that `m * m >= v`.
///
/// # Examples
///
/// ```
/// use magic_square::utils::ceil_sqrt;
///
/// assert_eq!(ceil_sqrt(0), 0);
/// assert_eq!(ceil_sqrt(1), 1);
/// assert_eq!(ceil_sqrt(10), 4);
/// assert_eq!(ceil_sqrt(16), 4);
/// assert_eq!(ceil_sqrt(17), 5);
/// ```
#[must_use]
pub fn ceil_sqrt(v: u32) -> u32 {
    if v == 0 {
        return 0;
    }

    // f64 holds every u32 exactly; the fix-up loops absorb any rounding
    // in sqrt itself.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut m = f64::from(v).sqrt().floor() as u32;

    while u64::from(m) * u64::from(m) < u64::from(v) {
        m += 1;
    }
    while m > 0 && u64::from(m - 1) * u64::from(m - 1) >= u64::from(v) {
        m -= 1;
    }

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_sqrt_exact_squares() {
        for m in 0u32..=1000 {
            assert_eq!(ceil_sqrt(m * m), m);
        }
    }

    #[test]
    fn test_ceil_sqrt_between_squares() {
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(3), 2);
        assert_eq!(ceil_sqrt(5), 3);
        assert_eq!(ceil_sqrt(26), 6);
        assert_eq!(ceil_sqrt(99), 10);
    }

    #[test]
    fn test_ceil_sqrt_large() {
        assert_eq!(ceil_sqrt(u32::MAX), 65_536);
        assert_eq!(ceil_sqrt(65_535 * 65_535), 65_535);
        assert_eq!(ceil_sqrt(65_535 * 65_535 + 1), 65_536);
    }
}
