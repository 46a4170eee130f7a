//! Constructive heuristics for building TSP tours.
//!
//! - [`random_tour`]: Random permutations until one is valid
//! - [`greedy_matching`]: Cheapest-edge matching into path fragments, O(n² log n)
//! - [`nearest_neighbor`]: Nearest/farthest-neighbor walk from every start, O(n³)
//! - [`cheapest_insertion`]: Cheapest insertion from every start, O(n⁴)
//!
//! The restarting heuristics are anytime: they poll a [`TimeBudget`] before
//! every attempt and keep the best valid tour found so far.
//!
//! [`TimeBudget`]: crate::TimeBudget

mod cheapest_insertion;
mod greedy_matching;
mod nearest_neighbor;
mod random;

pub use cheapest_insertion::cheapest_insertion;
pub use greedy_matching::greedy_matching;
pub use nearest_neighbor::{nearest_neighbor, NeighborRule};
pub use random::random_tour;

use crate::models::Tour;
use crate::report::Termination;

/// Outcome of a construction heuristic.
#[derive(Debug, Clone)]
pub struct Construction {
    /// Best valid tour found, if any.
    pub best: Option<Tour>,
    /// Number of attempts made (permutations drawn or start cities tried).
    pub attempts: usize,
    /// Whether every attempt ran or the budget cut the loop short.
    pub termination: Termination,
}

/// Replaces `best` with `candidate` if the candidate is valid and strictly
/// cheaper. Returns `true` on replacement.
pub(crate) fn keep_if_better(best: &mut Option<Tour>, candidate: Tour) -> bool {
    if !candidate.is_valid() {
        return false;
    }
    if best.as_ref().is_none_or(|b| candidate.cost() < b.cost()) {
        *best = Some(candidate);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::CostMatrix;

    #[test]
    fn test_keep_if_better_strict() {
        let cm = CostMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 1.0],
            vec![2.0, 1.0, 0.0],
        ])
        .expect("valid");
        let mut best = None;
        let a = Tour::new(vec![0, 1, 2], &cm).expect("permutation");
        assert!(keep_if_better(&mut best, a.clone()));
        // Same cost, different route: not strictly better.
        let b = Tour::new(vec![0, 2, 1], &cm).expect("permutation");
        assert!(!keep_if_better(&mut best, b));
        assert_eq!(best, Some(a));
    }

    #[test]
    fn test_keep_if_better_rejects_invalid() {
        let mut cm = CostMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).expect("valid");
        cm.forbid(1, 0);
        let mut best = None;
        let t = Tour::new(vec![0, 1], &cm).expect("permutation");
        assert!(!keep_if_better(&mut best, t));
        assert!(best.is_none());
    }
}
