//! Nearest-first candidate queue.

use std::collections::BinaryHeap;

use tracing::trace;

use crate::candidate::ScoredCandidate;

/// Priority queue that pops the candidate with the smallest distance.
///
/// A thin wrapper over `BinaryHeap<ScoredCandidate>`; the inverted ordering
/// of [`ScoredCandidate`] turns the max-heap into a min-distance queue.
/// Among equal distances the pop order is unspecified.
///
/// # Example
///
/// ```
/// use leafpack_select::CandidateQueue;
///
/// let mut queue = CandidateQueue::from_distances(&[3.0, 0.5, 2.0]);
/// assert_eq!(queue.pop_nearest().unwrap().index, 1);
/// assert_eq!(queue.pop_nearest().unwrap().index, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateQueue {
    heap: BinaryHeap<ScoredCandidate>,
}

impl CandidateQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Builds a queue where each value is indexed by its position.
    pub fn from_distances(distances: &[f64]) -> Self {
        distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| ScoredCandidate::new(distance, index))
            .collect()
    }

    /// Adds a candidate.
    pub fn push(&mut self, candidate: ScoredCandidate) {
        trace!(
            distance = candidate.distance,
            index = candidate.index,
            "push candidate"
        );
        self.heap.push(candidate);
    }

    /// Removes and returns the nearest candidate.
    pub fn pop_nearest(&mut self) -> Option<ScoredCandidate> {
        let popped = self.heap.pop();
        if let Some(c) = &popped {
            trace!(distance = c.distance, index = c.index, "pop candidate");
        }
        popped
    }

    /// The nearest candidate, without removing it.
    pub fn peek_nearest(&self) -> Option<&ScoredCandidate> {
        self.heap.peek()
    }

    /// Number of queued candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no candidates are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains the queue into a vector ordered nearest-first.
    pub fn into_nearest_first(self) -> Vec<ScoredCandidate> {
        let mut sorted = self.heap.into_sorted_vec();
        // into_sorted_vec is ascending under the inverted order: farthest first
        sorted.reverse();
        sorted
    }
}

impl FromIterator<ScoredCandidate> for CandidateQueue {
    fn from_iter<I: IntoIterator<Item = ScoredCandidate>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

impl Extend<ScoredCandidate> for CandidateQueue {
    fn extend<I: IntoIterator<Item = ScoredCandidate>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}
