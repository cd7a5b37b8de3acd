//! Minimum search and nearest-first ranking for agglomerative clustering.
//!
//! Two ways to pick the next smallest distance:
//!
//! - scan a range with [`min_element`] (one pass, first minimum wins,
//!   empty range returns the end position);
//! - queue [`ScoredCandidate`]s in a [`CandidateQueue`], whose max-heap pops
//!   the nearest candidate because candidate ordering is inverted.
//!
//! # Quick start
//!
//! ```
//! use leafpack_select::{min_element, try_min_element, SelectError};
//!
//! let d = [0.9, 0.2, 0.7, 0.2];
//! assert_eq!(min_element(&d[..], 0, d.len()), 1);
//! assert_eq!(min_element(&d[..], 2, 2), 2); // empty: sentinel
//! assert_eq!(try_min_element(&d, 2, 2), Err(SelectError::EmptyRange { start: 2 }));
//! ```

pub mod candidate;
pub mod error;
pub mod min;
pub mod queue;

pub use candidate::ScoredCandidate;
pub use error::SelectError;
pub use min::{min_element, min_in, try_min_element};
pub use queue::CandidateQueue;
