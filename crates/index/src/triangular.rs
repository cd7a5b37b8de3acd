//! Triangular-number arithmetic shared by both packing conventions.
//!
//! The raw functions here are total: they wrap on overflow instead of
//! panicking, so out-of-contract inputs give meaningless values rather than
//! aborting. Use the `checked_*` variants when the result must be trusted.

/// Returns the `k`-th triangular number `k * (k + 1) / 2`, wrapping on overflow.
///
/// The halving is applied to the even factor first, so the product only
/// wraps when the true result does not fit in `usize`.
#[inline]
pub fn triangular(k: usize) -> usize {
    if k.is_multiple_of(2) {
        (k / 2).wrapping_mul(k.wrapping_add(1))
    } else {
        k.wrapping_mul(k / 2 + 1)
    }
}

/// Returns `k * (k + 1) / 2`, or `None` if it does not fit in `usize`.
#[inline]
pub fn checked_triangular(k: usize) -> Option<usize> {
    if k.is_multiple_of(2) {
        (k / 2).checked_mul(k + 1)
    } else {
        k.checked_mul(k / 2 + 1)
    }
}

/// Returns the largest `r` such that `triangular(r) <= k`.
///
/// Starts from the closed form `floor((sqrt(8k + 1) - 1) / 2)` and corrects
/// the estimate with integer comparisons, so the result is exact for every
/// `k` including perfect triangular numbers where `f64` rounding would
/// otherwise shift the answer by one.
pub fn triangular_root(k: usize) -> usize {
    let estimate = ((8.0 * k as f64 + 1.0).sqrt() - 1.0) / 2.0;
    let mut r = estimate.floor() as usize;

    while r > 0 && checked_triangular(r).is_none_or(|t| t > k) {
        r -= 1;
    }
    while checked_triangular(r + 1).is_some_and(|t| t <= k) {
        r += 1;
    }
    r
}

/// Packed buffer length `n * (n - 1) / 2` for an `n`-item matrix.
///
/// Returns 0 for `n <= 1`. Wraps on overflow.
#[inline]
pub fn packed_len(n: usize) -> usize {
    if n < 2 { 0 } else { triangular(n - 1) }
}

/// Packed buffer length, or `None` if it does not fit in `usize`.
#[inline]
pub fn checked_packed_len(n: usize) -> Option<usize> {
    if n < 2 {
        Some(0)
    } else {
        checked_triangular(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangular_known_values() {
        let expected = [0, 1, 3, 6, 10, 15, 21, 28, 36, 45];
        for (k, &t) in expected.iter().enumerate() {
            assert_eq!(triangular(k), t, "k = {k}");
            assert_eq!(checked_triangular(k), Some(t), "k = {k}");
        }
    }

    #[test]
    fn test_checked_triangular_overflow() {
        assert_eq!(checked_triangular(usize::MAX), None);
        assert_eq!(checked_triangular(usize::MAX - 1), None);
    }

    #[test]
    fn test_root_at_triangular_boundaries() {
        // T(r) maps to r, T(r) - 1 maps to r - 1
        for r in 1..2000usize {
            let t = triangular(r);
            assert_eq!(triangular_root(t), r, "exact T({r}) = {t}");
            assert_eq!(triangular_root(t - 1), r - 1, "T({r}) - 1 = {}", t - 1);
        }
        assert_eq!(triangular_root(0), 0);
    }

    #[test]
    fn test_root_between_boundaries() {
        // 7, 8, 9 all lie in row 3 (T(3) = 6, T(4) = 10)
        assert_eq!(triangular_root(7), 3);
        assert_eq!(triangular_root(8), 3);
        assert_eq!(triangular_root(9), 3);
        assert_eq!(triangular_root(10), 4);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_root_large_values() {
        // Past 2^53 the f64 estimate alone is no longer exact.
        for r in [
            94_906_265usize,
            134_217_727,
            1_000_000_007,
            4_000_000_000,
            6_000_000_000,
        ] {
            let t = triangular(r);
            assert_eq!(triangular_root(t), r, "exact T({r})");
            assert_eq!(triangular_root(t - 1), r - 1, "T({r}) - 1");
            assert_eq!(triangular_root(t + r), r, "last offset of row {r}");
        }
    }

    #[test]
    fn test_root_usize_max() {
        let r = triangular_root(usize::MAX);
        assert!(checked_triangular(r).is_some());
        assert!(checked_triangular(r + 1).is_none());
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 0);
        assert_eq!(packed_len(2), 1);
        assert_eq!(packed_len(4), 6);
        assert_eq!(packed_len(100), 4950);
        assert_eq!(checked_packed_len(4), Some(6));
        assert_eq!(checked_packed_len(usize::MAX), None);
    }
}
