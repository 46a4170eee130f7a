//! Result contract consumed by the presentation layer.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{Cost, Tour};

/// Which solver entry point produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Random permutations until a valid tour appears.
    Random,
    /// Greedy matching of cheapest edges into path fragments.
    GreedyMatching,
    /// Nearest-neighbor walk restarted from every city.
    NearestNeighbor,
    /// Farthest-neighbor walk restarted from every city.
    FarthestNeighbor,
    /// Cheapest insertion restarted from every city.
    CheapestInsertion,
    /// Best-first branch-and-bound.
    BranchAndBound,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Random => "random",
            Algorithm::GreedyMatching => "greedy_matching",
            Algorithm::NearestNeighbor => "nearest_neighbor",
            Algorithm::FarthestNeighbor => "farthest_neighbor",
            Algorithm::CheapestInsertion => "cheapest_insertion",
            Algorithm::BranchAndBound => "branch_and_bound",
        };
        f.write_str(name)
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The algorithm ran to its natural end. For branch-and-bound the
    /// frontier emptied, so the returned tour is optimal.
    Completed,
    /// The time budget expired first; the result is best effort.
    TimeLimitReached,
    /// Branch-and-bound exhausted its frontier after discarding states to
    /// stay within the frontier limit; the result is best effort.
    FrontierLimitReached,
}

/// Outcome of one solve call.
///
/// Fields an algorithm does not track are `None` rather than zero.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    /// Entry point that produced this result.
    pub algorithm: Algorithm,
    /// Cost of the best tour, or `Unreachable` if none was found.
    pub cost: Cost,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Attempts (random, constructions) or improving solutions found
    /// during search (branch-and-bound; the initial tour is not counted).
    pub count: usize,
    /// Best valid tour, if any.
    pub solution: Option<Tour>,
    /// Largest frontier size observed.
    pub max_frontier_size: Option<usize>,
    /// Search states created.
    pub total_states_created: Option<u64>,
    /// Search states pruned.
    pub pruned_states: Option<u64>,
    /// Why the run stopped.
    pub termination: Termination,
}

impl SolveResult {
    /// Returns `true` if a valid tour was found.
    pub fn is_feasible(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns `true` if branch-and-bound exhausted its frontier.
    pub fn is_proven_optimal(&self) -> bool {
        self.algorithm == Algorithm::BranchAndBound
            && self.termination == Termination::Completed
            && self.is_feasible()
    }

    /// Serializes the result to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
