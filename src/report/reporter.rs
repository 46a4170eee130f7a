//! Assembly of [`SolveResult`] from solver outcomes.

use std::time::Duration;

use super::{Algorithm, SolveResult};
use crate::bnb::SearchOutcome;
use crate::constructive::Construction;
use crate::models::{Cost, Tour};

/// Packages solver outcomes into the [`SolveResult`] contract.
///
/// Only tours with finite cost are reported as solutions; statistics an
/// algorithm does not track stay `None`.
pub struct ResultReporter;

impl ResultReporter {
    /// Reports a construction heuristic run.
    pub fn construction(
        algorithm: Algorithm,
        outcome: Construction,
        elapsed: Duration,
    ) -> SolveResult {
        let solution = valid(outcome.best);
        SolveResult {
            algorithm,
            cost: cost_of(&solution),
            elapsed,
            count: outcome.attempts,
            solution,
            max_frontier_size: None,
            total_states_created: None,
            pruned_states: None,
            termination: outcome.termination,
        }
    }

    /// Reports a branch-and-bound run with its search statistics.
    pub fn search(outcome: SearchOutcome, elapsed: Duration) -> SolveResult {
        let solution = valid(outcome.best);
        let stats = outcome.statistics;
        SolveResult {
            algorithm: Algorithm::BranchAndBound,
            cost: cost_of(&solution),
            elapsed,
            count: usize::try_from(stats.solutions_found).unwrap_or(usize::MAX),
            solution,
            max_frontier_size: Some(stats.max_frontier_size),
            total_states_created: Some(stats.states_created),
            pruned_states: Some(stats.states_pruned),
            termination: outcome.termination,
        }
    }
}

fn valid(tour: Option<Tour>) -> Option<Tour> {
    tour.filter(Tour::is_valid)
}

fn cost_of(solution: &Option<Tour>) -> Cost {
    solution.as_ref().map_or(Cost::Unreachable, Tour::cost)
}
