//! Borrowed views over caller-owned packed distance buffers.
//!
//! Views never allocate. The buffer length must equal the layout's packed
//! length; the check happens once at construction.

use tracing::{debug, instrument};

use crate::convention::{Convention, Pair};
use crate::error::IndexError;
use crate::layout::PackedLayout;

fn check_len<C: Convention>(layout: &PackedLayout<C>, actual: usize) -> Result<(), IndexError> {
    if actual != layout.len() {
        debug!(
            expected = layout.len(),
            actual,
            convention = C::NAME,
            "buffer length mismatch"
        );
        return Err(IndexError::BufferLengthMismatch {
            expected: layout.len(),
            actual,
        });
    }
    Ok(())
}

/// Read-only view of a packed distance matrix.
///
/// # Example
///
/// ```
/// use leafpack_index::{PackedLayout, PackedView, RowMajor};
///
/// let layout = PackedLayout::<RowMajor>::new(3).unwrap();
/// let buf = [1.0, 2.0, 3.0];
/// let view = PackedView::new(layout, &buf).unwrap();
/// assert_eq!(view.get(2, 1).unwrap(), 3.0);
/// assert_eq!(view.get(1, 1).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PackedView<'a, C> {
    layout: PackedLayout<C>,
    data: &'a [f64],
}

impl<'a, C: Convention> PackedView<'a, C> {
    /// Wraps `data` as a packed matrix with the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::BufferLengthMismatch`] if `data.len() != layout.len()`.
    pub fn new(layout: PackedLayout<C>, data: &'a [f64]) -> Result<Self, IndexError> {
        check_len(&layout, data.len())?;
        Ok(Self { layout, data })
    }

    /// The layout this view addresses with.
    pub fn layout(&self) -> PackedLayout<C> {
        self.layout
    }

    /// The underlying packed buffer.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Distance between items `i` and `j`; `0.0` on the diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCoordinate`] if either coordinate is `>= n`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, IndexError> {
        read(&self.layout, self.data, i, j)
    }

    /// Iterates `(pair, distance)` in buffer order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Pair, f64)> + 'a {
        let data = self.data;
        self.layout.pairs().map(move |(k, p)| (p, data[k]))
    }
}

/// Mutable view of a packed distance matrix.
#[derive(Debug)]
pub struct PackedViewMut<'a, C> {
    layout: PackedLayout<C>,
    data: &'a mut [f64],
}

impl<'a, C: Convention> PackedViewMut<'a, C> {
    /// Wraps `data` as a writable packed matrix with the given layout.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::BufferLengthMismatch`] if `data.len() != layout.len()`.
    pub fn new(layout: PackedLayout<C>, data: &'a mut [f64]) -> Result<Self, IndexError> {
        check_len(&layout, data.len())?;
        Ok(Self { layout, data })
    }

    /// The layout this view addresses with.
    pub fn layout(&self) -> PackedLayout<C> {
        self.layout
    }

    /// Distance between items `i` and `j`; `0.0` on the diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCoordinate`] if either coordinate is `>= n`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, IndexError> {
        read(&self.layout, &*self.data, i, j)
    }

    /// Stores the distance between items `i` and `j`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidCoordinate`] for the diagonal or an
    /// out-of-range coordinate.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), IndexError> {
        let k = self.layout.offset(i, j)?;
        self.data[k] = value;
        Ok(())
    }

    /// Fills every cell with `distance(lo, hi)`, visiting cells in buffer order.
    #[instrument(skip_all, fields(n = self.layout.n(), convention = C::NAME))]
    pub fn fill_with<F>(&mut self, mut distance: F)
    where
        F: FnMut(usize, usize) -> f64,
    {
        for (k, p) in self.layout.pairs() {
            self.data[k] = distance(p.lo, p.hi);
        }
        debug!(cells = self.layout.len(), "filled packed matrix");
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> PackedView<'_, C> {
        PackedView {
            layout: self.layout,
            data: &*self.data,
        }
    }
}

fn read<C: Convention>(
    layout: &PackedLayout<C>,
    data: &[f64],
    i: usize,
    j: usize,
) -> Result<f64, IndexError> {
    if i == j && i < layout.n() {
        return Ok(0.0);
    }
    let k = layout.offset(i, j)?;
    Ok(data[k])
}
