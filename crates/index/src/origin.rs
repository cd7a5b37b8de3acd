//! Origin-form packing: offsets grow with the larger coordinate.
//!
//! Pair `(i, j)` with `hi = max(i, j)` and `lo = min(i, j)` lives after every
//! pair whose larger coordinate is below `hi`, i.e. at `hi * (hi - 1) / 2 + lo`.
//! The layout does not depend on the matrix size, so a buffer sized for `n`
//! items is a prefix of the buffer for `n + 1` items.
//!
//! ```text
//!         lo=0  lo=1  lo=2
//! hi=1      0
//! hi=2      1     2
//! hi=3      3     4     5
//! ```
//!
//! Rows start on the triangular numbers 0, 1, 3, 6, 10, ...

use crate::triangular::{packed_len, triangular_root};

/// Forward map `max(i, j) * (max(i, j) - 1) / 2 + min(i, j)`.
///
/// Symmetric in `(i, j)`. `i == j` is not a defined input: `(i, i)` aliases
/// `(i + 1, 0)`.
#[inline]
pub fn origin_offset(i: usize, j: usize) -> usize {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    packed_len(hi).wrapping_add(lo)
}

/// Recovers the larger coordinate of the pair stored at `offset`.
///
/// `floor((sqrt(8 * offset + 1) - 1) / 2)` names the last complete row
/// boundary at or below `offset`; the pair's row is the one after it.
#[inline]
pub fn origin_row(offset: usize) -> usize {
    triangular_root(offset).wrapping_add(1)
}

/// Recovers the smaller coordinate given the row from [`origin_row`].
#[inline]
pub fn origin_col(row: usize, offset: usize) -> usize {
    offset.wrapping_sub(packed_len(row))
}
