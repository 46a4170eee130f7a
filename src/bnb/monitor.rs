//! Search observers.
//!
//! A [`SearchMonitor`] is notified at the points where the search changes
//! its incumbent or discards part of the tree. Every method has an empty
//! default, so observers implement only what they need.

use super::SearchStatistics;
use crate::models::{Cost, Tour};

/// Observer of a branch-and-bound run.
pub trait SearchMonitor {
    /// Called once before the first pop with the root bound and the cost of
    /// the initial tour (`Unreachable` if none).
    fn on_search_start(&mut self, _root_bound: Cost, _incumbent: Cost) {}

    /// Called for every pruned state with its bound and the incumbent cost
    /// at prune time.
    fn on_state_pruned(&mut self, _bound: Cost, _incumbent: Cost) {}

    /// Called whenever the search replaces the incumbent.
    fn on_solution_found(&mut self, _tour: &Tour) {}

    /// Called once after the loop exits.
    fn on_search_end(&mut self, _statistics: &SearchStatistics) {}
}

/// A monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    fn on_search_start(&mut self, root_bound: Cost, incumbent: Cost) {
        (**self).on_search_start(root_bound, incumbent);
    }

    fn on_state_pruned(&mut self, bound: Cost, incumbent: Cost) {
        (**self).on_state_pruned(bound, incumbent);
    }

    fn on_solution_found(&mut self, tour: &Tour) {
        (**self).on_solution_found(tour);
    }

    fn on_search_end(&mut self, statistics: &SearchStatistics) {
        (**self).on_search_end(statistics);
    }
}
