//! Checked addressing for one matrix under one convention.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::debug;

use crate::convention::{Convention, Pair};
use crate::error::IndexError;
use crate::triangular::checked_packed_len;

/// Address space of a packed symmetric matrix of `n` items.
///
/// The convention is part of the type, so offsets produced by one layout can
/// only be decoded by a layout of the same convention. The size is fixed at
/// construction.
///
/// # Example
///
/// ```
/// use leafpack_index::{Origin, PackedLayout, Pair};
///
/// let layout = PackedLayout::<Origin>::new(4).unwrap();
/// assert_eq!(layout.len(), 6);
/// assert_eq!(layout.offset(3, 1).unwrap(), 4);
/// assert_eq!(layout.pair(4).unwrap(), Pair { lo: 1, hi: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedLayout<C> {
    n: usize,
    len: usize,
    convention: PhantomData<C>,
}

impl<C: Convention> PackedLayout<C> {
    /// Creates the layout for `n` items.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidSize`] if `n == 0` or `n * (n - 1) / 2`
    /// does not fit in `usize`.
    pub fn new(n: usize) -> Result<Self, IndexError> {
        let len = match checked_packed_len(n) {
            Some(len) if n >= 1 => len,
            _ => {
                debug!(n, convention = C::NAME, "rejected matrix size");
                return Err(IndexError::InvalidSize { n });
            }
        };
        Ok(Self {
            n,
            len,
            convention: PhantomData,
        })
    }

    /// Number of items.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Packed buffer length `n * (n - 1) / 2`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a single-item matrix, which has no off-diagonal cells.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Name of the convention this layout uses.
    pub fn convention(&self) -> &'static str {
        C::NAME
    }

    /// Linear offset of `(i, j)`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCoordinate`] if `i == j` or either
    /// coordinate is `>= n`.
    pub fn offset(&self, i: usize, j: usize) -> Result<usize, IndexError> {
        if i == j || i >= self.n || j >= self.n {
            debug!(i, j, n = self.n, "rejected coordinate");
            return Err(IndexError::InvalidCoordinate { i, j, n: self.n });
        }
        Ok(C::offset(i, j, self.n))
    }

    /// Pair stored at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRangeIndex`] if `offset >= len`.
    pub fn pair(&self, offset: usize) -> Result<Pair, IndexError> {
        if offset >= self.len {
            debug!(offset, len = self.len, "rejected offset");
            return Err(IndexError::OutOfRangeIndex {
                offset,
                len: self.len,
            });
        }
        Ok(C::pair(offset, self.n))
    }

    /// Iterates `(offset, pair)` in buffer order.
    pub fn pairs(&self) -> Pairs<C> {
        Pairs {
            layout: *self,
            next: 0,
        }
    }
}

/// Iterator over every cell of a [`PackedLayout`], created by [`PackedLayout::pairs`].
#[derive(Debug, Clone)]
pub struct Pairs<C> {
    layout: PackedLayout<C>,
    next: usize,
}

impl<C: Convention> Iterator for Pairs<C> {
    type Item = (usize, Pair);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.layout.len {
            return None;
        }
        let offset = self.next;
        self.next += 1;
        Some((offset, C::pair(offset, self.layout.n)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<C: Convention> ExactSizeIterator for Pairs<C> {}
impl<C: Convention> FusedIterator for Pairs<C> {}
