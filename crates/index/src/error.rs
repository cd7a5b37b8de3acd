//! Error types for the leafpack-index crate.

/// Error type for the checked operations of the leafpack-index crate.
///
/// The raw mapping functions in [`crate::triangular`] never fail; these
/// variants are only produced by [`crate::PackedLayout`] and the buffer views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Returned when a coordinate pair is on the diagonal or outside the matrix.
    #[error("invalid coordinate ({i}, {j}) for matrix of size {n}")]
    InvalidCoordinate {
        /// First coordinate.
        i: usize,
        /// Second coordinate.
        j: usize,
        /// Matrix size.
        n: usize,
    },

    /// Returned when a linear offset lies beyond the packed buffer.
    #[error("offset {offset} out of range for packed length {len}")]
    OutOfRangeIndex {
        /// The rejected offset.
        offset: usize,
        /// Packed buffer length `n * (n - 1) / 2`.
        len: usize,
    },

    /// Returned when the matrix size is zero or its packed length overflows `usize`.
    #[error("matrix size must be >= 1 with an addressable packed length, got {n}")]
    InvalidSize {
        /// The rejected matrix size.
        n: usize,
    },

    /// Returned when a caller buffer does not match the layout's packed length.
    #[error("buffer length {actual} does not match packed length {expected}")]
    BufferLengthMismatch {
        /// Packed length required by the layout.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
