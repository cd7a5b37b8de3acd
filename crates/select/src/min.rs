//! Linear-scan minimum over a half-open range.

use std::ops::Index;

use tracing::debug;

use crate::error::SelectError;

/// Position of the smallest element of `seq[start..end]`.
///
/// Scans once with strict `<`, so the first of several equal minima wins.
/// An empty range (`start >= end`) returns `end`, which callers must treat as
/// "no element" before indexing with it. NaN never compares less, so a NaN is
/// only returned when it sits at `start` and nothing smaller follows.
///
/// Works on any random-access sequence, not just slices.
///
/// # Panics
///
/// Panics if the sequence's indexing panics for a position in the range
/// (e.g. `end > len` on a slice). Use [`try_min_element`] to get an error
/// instead.
pub fn min_element<S, T>(seq: &S, start: usize, end: usize) -> usize
where
    S: Index<usize, Output = T> + ?Sized,
    T: PartialOrd,
{
    if start >= end {
        return end;
    }
    let mut min = start;
    for pos in (start + 1)..end {
        if seq[pos] < seq[min] {
            min = pos;
        }
    }
    min
}

/// Position of the smallest element of the whole slice, `values.len()` if empty.
pub fn min_in<T: PartialOrd>(values: &[T]) -> usize {
    min_element(values, 0, values.len())
}

/// Checked variant of [`min_element`] over a slice.
///
/// # Errors
///
/// - [`SelectError::EmptyRange`] if `start == end`
/// - [`SelectError::InvalidRange`] if `start > end` or `end > values.len()`
pub fn try_min_element<T: PartialOrd>(
    values: &[T],
    start: usize,
    end: usize,
) -> Result<usize, SelectError> {
    if start > end || end > values.len() {
        debug!(start, end, len = values.len(), "rejected range");
        return Err(SelectError::InvalidRange {
            start,
            end,
            len: values.len(),
        });
    }
    if start == end {
        return Err(SelectError::EmptyRange { start });
    }
    Ok(min_element(values, start, end))
}
