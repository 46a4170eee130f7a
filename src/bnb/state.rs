//! Search states and frontier ordering.

use std::cmp::Ordering;

use super::reduced::ReducedMatrix;
use crate::distance::CostModel;
use crate::models::Cost;

/// A partial tour with its own reduced matrix and lower bound.
///
/// The path always starts at city 0. Only the state being expanded holds a
/// matrix; the frontier stores [`FrontierEntry`] values instead.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    path: Vec<usize>,
    visited: Vec<bool>,
    matrix: ReducedMatrix,
    bound: Cost,
}

impl SearchState {
    /// The root state: path `[0]` and the fully reduced scenario matrix.
    pub(crate) fn root<C: CostModel + ?Sized>(costs: &C) -> Self {
        let n = costs.num_cities();
        let mut matrix = ReducedMatrix::from_model(costs);
        let all: Vec<usize> = (0..n).collect();
        let bound = matrix.reduce(&all, &all);
        let mut visited = vec![false; n];
        visited[0] = true;
        Self {
            path: vec![0],
            visited,
            matrix,
            bound,
        }
    }

    pub(crate) fn bound(&self) -> Cost {
        self.bound
    }

    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    pub(crate) fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    pub(crate) fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Unvisited cities reachable from the last city in the reduced matrix.
    pub(crate) fn branch_targets(&self) -> Vec<usize> {
        let from = self.last();
        (0..self.visited.len())
            .filter(|&to| !self.visited[to] && self.matrix.get(from, to).is_finite())
            .collect()
    }

    /// Returns a copy extended with `to`.
    pub(crate) fn branch(&self, to: usize) -> SearchState {
        let mut child = self.clone();
        child.advance(to);
        child
    }

    /// Extends the path with `to` in place.
    ///
    /// The new bound is the old bound plus the reduced cost of the taken
    /// edge plus whatever the matrix still reduces by. The edge's row and
    /// column are forbidden, and so is the early return `to → start` while
    /// cities remain unvisited.
    fn advance(&mut self, to: usize) {
        let from = self.last();
        let start = self.path[0];
        let edge = self.matrix.get(from, to);
        let n = self.visited.len();

        self.path.push(to);
        self.visited[to] = true;
        self.matrix.forbid_row(from);
        self.matrix.forbid_col(to);
        if self.path.len() < n {
            self.matrix.forbid(to, start);
        }

        // Rows still needing an outgoing edge, columns an incoming one.
        let unvisited: Vec<usize> = (0..n).filter(|&c| !self.visited[c]).collect();
        let rows: Vec<usize> = unvisited.iter().copied().chain(std::iter::once(to)).collect();
        let cols: Vec<usize> = unvisited.into_iter().chain(std::iter::once(start)).collect();
        let reduction = self.matrix.reduce(&rows, &cols);

        self.bound = self.bound + edge + reduction;
    }
}

/// A frontier entry: the path and bound of a state without its matrix.
///
/// Ordered so that `BinaryHeap::pop` yields the lowest bound first, then
/// the deepest path, then the earliest created. The matrix is rebuilt by
/// [`FrontierEntry::restore`] when the entry is expanded, which keeps each
/// entry at O(n) memory instead of O(n²).
#[derive(Debug, Clone)]
pub(crate) struct FrontierEntry {
    path: Vec<usize>,
    bound: Cost,
    seq: u64,
}

impl FrontierEntry {
    pub(crate) fn new(state: SearchState, seq: u64) -> Self {
        Self {
            bound: state.bound,
            path: state.path,
            seq,
        }
    }

    pub(crate) fn bound(&self) -> Cost {
        self.bound
    }

    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    /// Rebuilds the full state by replaying the path from `root`.
    ///
    /// Replay repeats the exact reductions that produced the entry, so the
    /// restored bound equals the stored one.
    pub(crate) fn restore(&self, root: &SearchState) -> SearchState {
        let mut state = root.clone();
        for &to in &self.path[1..] {
            state.advance(to);
        }
        debug_assert_eq!(state.bound, self.bound);
        state
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .cmp(&self.bound)
            .then_with(|| self.depth().cmp(&other.depth()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}
