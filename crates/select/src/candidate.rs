//! Distance-scored candidates with nearest-first ordering.

use std::cmp::Ordering;

/// A weighted link to an item or matrix cell.
///
/// Ordering is inverted relative to `distance`: a smaller distance compares
/// as *greater*. A max-heap of candidates therefore yields the nearest one
/// first. Do not flip this to ascending order; [`crate::CandidateQueue`] and
/// any `BinaryHeap<ScoredCandidate>` rely on it.
///
/// `Ord` is a lawful total order: equal distances (including `0.0` and
/// `-0.0`) compare `Equal`, and every NaN ranks below every number whatever
/// its sign bit, so a heap never yields a NaN before a real distance.
///
/// # Example
///
/// ```
/// use leafpack_select::ScoredCandidate;
///
/// let near = ScoredCandidate::new(1.0, 0);
/// let far = ScoredCandidate::new(5.0, 1);
/// assert!(far < near);
/// assert!(far.is_lower_priority_than(&near));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate {
    /// Distance to the candidate.
    pub distance: f64,
    /// Identifier of the referenced item or cell.
    pub index: usize,
}

impl ScoredCandidate {
    /// Creates a candidate.
    pub fn new(distance: f64, index: usize) -> Self {
        Self { distance, index }
    }

    /// The raw ranking relation `!(self.distance < other.distance)`.
    ///
    /// True when `self` is at least as far as `other`, including ties and any
    /// comparison involving NaN. Unlike `Ord` this relation is not
    /// irreflexive; it is kept for callers that need to reproduce a selection
    /// order decided by it.
    pub fn is_lower_priority_than(&self, other: &Self) -> bool {
        !(self.distance < other.distance)
    }
}

impl PartialEq for ScoredCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredCandidate {}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.distance.is_nan(), other.distance.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Reversed for nearest-first max-heaps
            (false, false) => other
                .distance
                .partial_cmp(&self.distance)
                .unwrap_or(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_inverted_order() {
        let a = ScoredCandidate::new(1.0, 0);
        let b = ScoredCandidate::new(5.0, 1);
        assert!(b < a);
        assert!(a > b);
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert!(b.is_lower_priority_than(&a));
        assert!(!a.is_lower_priority_than(&b));
    }

    #[test]
    fn test_max_heap_pops_nearest() {
        let mut heap = BinaryHeap::new();
        heap.push(ScoredCandidate::new(1.0, 0));
        heap.push(ScoredCandidate::new(5.0, 1));
        heap.push(ScoredCandidate::new(0.5, 2));
        assert_eq!(heap.pop().map(|c| c.index), Some(2));
        assert_eq!(heap.pop().map(|c| c.index), Some(0));
        assert_eq!(heap.pop().map(|c| c.index), Some(1));
    }

    #[test]
    fn test_ties() {
        let a = ScoredCandidate::new(2.0, 0);
        let b = ScoredCandidate::new(2.0, 7);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
        // The raw relation holds both ways on a tie
        assert!(a.is_lower_priority_than(&b));
        assert!(b.is_lower_priority_than(&a));
    }

    #[test]
    fn test_nan_ranks_last() {
        let nan = ScoredCandidate::new(f64::NAN, 0);
        let far = ScoredCandidate::new(f64::INFINITY, 1);
        assert!(nan < far);
        assert!(nan.is_lower_priority_than(&far));
        assert!(far.is_lower_priority_than(&nan));
    }

    #[test]
    fn test_nan_order_ignores_sign() {
        let neg = ScoredCandidate::new(-f64::NAN, 0);
        let pos = ScoredCandidate::new(f64::NAN, 1);
        let low = ScoredCandidate::new(f64::NEG_INFINITY, 2);
        assert!(neg.distance.is_sign_negative());
        assert!(neg < low);
        assert!(pos < low);
        assert_eq!(neg.cmp(&pos), Ordering::Equal);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let a = ScoredCandidate::new(0.0, 0);
        let b = ScoredCandidate::new(-0.0, 1);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }
}
