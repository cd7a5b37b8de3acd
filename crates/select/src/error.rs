//! Error types for the leafpack-select crate.

/// Error type for the checked minimum search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Returned when the search range holds no elements.
    #[error("empty range at position {start}")]
    EmptyRange {
        /// Start (and end) of the empty range.
        start: usize,
    },

    /// Returned when the range is reversed or extends past the sequence.
    #[error("invalid range [{start}, {end}) for sequence of length {len}")]
    InvalidRange {
        /// Inclusive start.
        start: usize,
        /// Exclusive end.
        end: usize,
        /// Length of the sequence.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_range() {
        let e = SelectError::EmptyRange { start: 3 };
        assert_eq!(e.to_string(), "empty range at position 3");
    }

    #[test]
    fn error_invalid_range() {
        let e = SelectError::InvalidRange {
            start: 4,
            end: 2,
            len: 10,
        };
        assert_eq!(
            e.to_string(),
            "invalid range [4, 2) for sequence of length 10"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SelectError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SelectError>();
    }
}
