//! Row-form packing: the condensed layout, row `i` holds `(i, i+1..n)`.
//!
//! Rows shrink by one entry each, so the offset of a pair depends on `n`.
//! Offsets computed for one `n` are meaningless for any other.
//!
//! ```text
//! n = 4   j=1  j=2  j=3
//! i=0      0    1    2
//! i=1           3    4
//! i=2                5
//! ```

use crate::triangular::{packed_len, triangular, triangular_root};

/// Forward map `n*min - min*(min+1)/2 + max - 1 - min`.
///
/// Symmetric in `(i, j)` and bijective onto `[0, n*(n-1)/2)` for `i != j`
/// in `[0, n)`.
#[inline]
pub fn row_major_offset(i: usize, j: usize, n: usize) -> usize {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    n.wrapping_mul(lo)
        .wrapping_sub(triangular(lo))
        .wrapping_add(hi)
        .wrapping_sub(1)
        .wrapping_sub(lo)
}

/// Inverse of [`row_major_offset`]: returns `(min, max)` for `offset`.
///
/// Counting offsets from the end of the buffer turns the shrinking rows into
/// growing ones, which is the origin-form problem again.
#[inline]
pub fn row_major_pair(offset: usize, n: usize) -> (usize, usize) {
    let reversed = packed_len(n).wrapping_sub(1).wrapping_sub(offset);
    let r = triangular_root(reversed);
    let c = reversed.wrapping_sub(triangular(r));
    let lo = n.wrapping_sub(2).wrapping_sub(r);
    let hi = n.wrapping_sub(1).wrapping_sub(c);
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_items() {
        let expected = [
            ((0, 1), 0),
            ((0, 2), 1),
            ((0, 3), 2),
            ((1, 2), 3),
            ((1, 3), 4),
            ((2, 3), 5),
        ];
        for ((i, j), offset) in expected {
            assert_eq!(row_major_offset(i, j, 4), offset, "({i}, {j})");
            assert_eq!(row_major_offset(j, i, 4), offset, "({j}, {i})");
            assert_eq!(row_major_pair(offset, 4), (i, j), "offset {offset}");
        }
    }

    #[test]
    fn test_two_items() {
        assert_eq!(row_major_offset(0, 1, 2), 0);
        assert_eq!(row_major_pair(0, 2), (0, 1));
    }

    #[test]
    fn test_round_trip_small() {
        for n in 2..40 {
            for i in 0..n {
                for j in (i + 1)..n {
                    let k = row_major_offset(i, j, n);
                    assert!(k < packed_len(n));
                    assert_eq!(row_major_pair(k, n), (i, j), "n = {n}");
                }
            }
        }
    }

    #[test]
    fn test_same_pair_differs_across_n() {
        // (1, 2) is offset 3 for n = 4 but offset 4 for n = 5
        assert_eq!(row_major_offset(1, 2, 4), 3);
        assert_eq!(row_major_offset(1, 2, 5), 4);
    }
}
