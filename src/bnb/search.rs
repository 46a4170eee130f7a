//! Best-first branch-and-bound search.
//!
//! # Algorithm
//!
//! States are kept in a priority queue ordered by lower bound (deeper
//! states first on ties). Each step pops the most promising state, prunes
//! it if its bound cannot beat the incumbent, and otherwise branches on
//! every unvisited city reachable from the end of its path. Children that
//! complete the tour are evaluated exactly; the rest are pushed unless
//! their bound already fails against the incumbent.
//!
//! Bounds come from reduced cost matrices (Little et al., 1963), which never
//! overestimate the cheapest completion, so pruning never discards a tour
//! better than the incumbent. If the frontier empties before the budget
//! expires, and no state was discarded to respect the frontier limit, the
//! incumbent is optimal.
//!
//! Frontier entries hold only a path and a bound. The reduced matrix of a
//! popped entry is rebuilt by replaying its path from the root, so a
//! popped-and-pruned entry costs nothing beyond the pop.

use std::collections::BinaryHeap;

use log::{debug, info, trace};

use super::state::{FrontierEntry, SearchState};
use super::{SearchMonitor, SearchStatistics};
use crate::budget::TimeBudget;
use crate::constructive::keep_if_better;
use crate::distance::CostModel;
use crate::models::{Cost, Tour};
use crate::report::Termination;

/// Outcome of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best valid tour known at exit (possibly the initial one).
    pub best: Option<Tour>,
    /// Counters accumulated during the run.
    pub statistics: SearchStatistics,
    /// `Completed` if the frontier emptied without discarding any state,
    /// proving optimality.
    pub termination: Termination,
}

/// Default cap on the number of frontier entries.
pub const DEFAULT_FRONTIER_LIMIT: usize = 500_000;

/// Runs branch-and-bound from an optional initial tour with the default
/// frontier limit.
///
/// The budget is checked before every pop; a state expansion in progress is
/// always finished.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{branch_and_bound, NoOpMonitor};
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::models::Cost;
/// use u_tsp::report::Termination;
/// use u_tsp::TimeBudget;
///
/// let inf = f64::INFINITY;
/// let cm = CostMatrix::from_rows(&[
///     vec![inf, 10.0, 15.0, 20.0],
///     vec![5.0, inf, 9.0, 10.0],
///     vec![6.0, 13.0, inf, 12.0],
///     vec![8.0, 8.0, 9.0, inf],
/// ]).unwrap();
/// let outcome = branch_and_bound(&cm, None, &TimeBudget::from_secs(5.0), &mut NoOpMonitor);
/// assert_eq!(outcome.termination, Termination::Completed);
/// assert_eq!(outcome.best.unwrap().cost(), Cost::Finite(35.0));
/// ```
pub fn branch_and_bound<C, M>(
    costs: &C,
    initial: Option<Tour>,
    budget: &TimeBudget,
    monitor: &mut M,
) -> SearchOutcome
where
    C: CostModel + ?Sized,
    M: SearchMonitor + ?Sized,
{
    branch_and_bound_with_limit(costs, initial, budget, DEFAULT_FRONTIER_LIMIT, monitor)
}

/// Runs branch-and-bound holding at most `frontier_limit` frontier entries.
///
/// Entries store only their path and bound, so memory grows with
/// `frontier_limit * n`. When a push would exceed the limit, the frontier
/// keeps its better half (by the pop order) and the rest is discarded. A
/// run that discarded states can no longer prove optimality; if its frontier
/// later empties it ends with [`Termination::FrontierLimitReached`].
pub fn branch_and_bound_with_limit<C, M>(
    costs: &C,
    initial: Option<Tour>,
    budget: &TimeBudget,
    frontier_limit: usize,
    monitor: &mut M,
) -> SearchOutcome
where
    C: CostModel + ?Sized,
    M: SearchMonitor + ?Sized,
{
    let n = costs.num_cities();
    let frontier_limit = frontier_limit.max(2);
    let mut stats = SearchStatistics::default();
    let mut best = initial.filter(Tour::is_valid);

    if n <= 1 {
        if n == 1 {
            stats.on_state_created();
            if keep_if_better(&mut best, Tour::from_route(vec![0], costs)) {
                stats.on_solution_found();
            }
        }
        monitor.on_search_end(&stats);
        return SearchOutcome {
            best,
            statistics: stats,
            termination: Termination::Completed,
        };
    }

    let root = SearchState::root(costs);
    stats.on_state_created();
    stats.set_root_lower_bound(root.bound());
    monitor.on_search_start(root.bound(), incumbent(&best));
    debug!(
        "branch-and-bound start: {n} cities, root bound {}, incumbent {}",
        root.bound(),
        incumbent(&best)
    );

    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    if root.bound() < incumbent(&best) {
        frontier.push(FrontierEntry::new(root.clone(), seq));
        seq += 1;
        stats.on_frontier_size(frontier.len());
    } else {
        stats.on_state_pruned();
        monitor.on_state_pruned(root.bound(), incumbent(&best));
    }

    let termination = loop {
        if frontier.is_empty() {
            break if stats.states_discarded > 0 {
                Termination::FrontierLimitReached
            } else {
                Termination::Completed
            };
        }
        if budget.is_exhausted() {
            break Termination::TimeLimitReached;
        }
        let Some(entry) = frontier.pop() else {
            continue;
        };

        let bssf = incumbent(&best);
        if entry.bound() >= bssf {
            stats.on_state_pruned();
            monitor.on_state_pruned(entry.bound(), bssf);
            continue;
        }

        let state = entry.restore(&root);
        for to in state.branch_targets() {
            let child = state.branch(to);
            stats.on_state_created();

            if child.is_complete() {
                let tour = Tour::from_route(child.into_path(), costs);
                if keep_if_better(&mut best, tour) {
                    stats.on_solution_found();
                    if let Some(tour) = best.as_ref() {
                        trace!("incumbent improved to {}", tour.cost());
                        monitor.on_solution_found(tour);
                    }
                }
                continue;
            }

            let bssf = incumbent(&best);
            if child.bound() >= bssf {
                stats.on_state_pruned();
                monitor.on_state_pruned(child.bound(), bssf);
                continue;
            }

            if frontier.len() >= frontier_limit {
                let discarded = shed(&mut frontier, frontier_limit / 2);
                stats.on_states_discarded(discarded);
                debug!("frontier limit {frontier_limit} reached, discarded {discarded} states");
            }
            frontier.push(FrontierEntry::new(child, seq));
            seq += 1;
            stats.on_frontier_size(frontier.len());
        }
    };

    if termination == Termination::Completed {
        info!("branch-and-bound proved optimality at {}", incumbent(&best));
    }
    debug!(
        "branch-and-bound end: {:?}, {} states created, {} pruned, {} discarded, frontier peak {}",
        termination,
        stats.states_created,
        stats.states_pruned,
        stats.states_discarded,
        stats.max_frontier_size
    );
    monitor.on_search_end(&stats);

    SearchOutcome {
        best,
        statistics: stats,
        termination,
    }
}

/// Keeps the `keep` entries that would pop first and drops the rest.
/// Returns the number dropped.
fn shed(frontier: &mut BinaryHeap<FrontierEntry>, keep: usize) -> u64 {
    let mut entries = std::mem::take(frontier).into_vec();
    let before = entries.len();
    if keep < before {
        // Descending order puts the entries that pop first at the front.
        entries.select_nth_unstable_by(keep, |a, b| b.cmp(a));
        entries.truncate(keep);
    }
    let dropped = before - entries.len();
    *frontier = BinaryHeap::from(entries);
    dropped as u64
}

fn incumbent(best: &Option<Tour>) -> Cost {
    best.as_ref().map_or(Cost::Unreachable, Tour::cost)
}
