//! Packing conventions as marker types.

use std::fmt;

use crate::origin::{origin_col, origin_offset, origin_row};
use crate::row_major::{row_major_offset, row_major_pair};

/// An unordered off-diagonal pair, stored as `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    /// Smaller coordinate.
    pub lo: usize,
    /// Larger coordinate.
    pub hi: usize,
}

impl Pair {
    /// Builds a pair from coordinates in either order.
    pub fn new(i: usize, j: usize) -> Self {
        if i < j {
            Self { lo: i, hi: j }
        } else {
            Self { lo: j, hi: i }
        }
    }

    /// Returns `(lo, hi)`.
    pub fn into_tuple(self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// A forward/inverse mapping pair for one packed layout.
///
/// Implemented by [`Origin`] and [`RowMajor`]. Both methods are raw: they
/// assume the caller already checked the inputs against `n`.
pub trait Convention: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Short name used in logs and CLI output.
    const NAME: &'static str;

    /// Linear offset of `(i, j)`, `i != j`, in a matrix of `n` items.
    fn offset(i: usize, j: usize, n: usize) -> usize;

    /// Pair stored at `offset` in a matrix of `n` items.
    fn pair(offset: usize, n: usize) -> Pair;
}

/// Origin form: offset is a function of the larger coordinate first, `n` unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Origin;

/// Row form: the condensed row-major layout, parameterised by `n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl Convention for Origin {
    const NAME: &'static str = "origin";

    #[inline]
    fn offset(i: usize, j: usize, _n: usize) -> usize {
        origin_offset(i, j)
    }

    #[inline]
    fn pair(offset: usize, _n: usize) -> Pair {
        let row = origin_row(offset);
        Pair {
            lo: origin_col(row, offset),
            hi: row,
        }
    }
}

impl Convention for RowMajor {
    const NAME: &'static str = "row-major";

    #[inline]
    fn offset(i: usize, j: usize, n: usize) -> usize {
        row_major_offset(i, j, n)
    }

    #[inline]
    fn pair(offset: usize, n: usize) -> Pair {
        let (lo, hi) = row_major_pair(offset, n);
        Pair { lo, hi }
    }
}
