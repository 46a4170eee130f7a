//! Exact branch-and-bound search.
//!
//! - [`branch_and_bound`]: best-first search with reduced-cost bounds
//! - [`SearchStatistics`]: per-run counters (states, prunings, frontier peak)
//! - [`SearchMonitor`]: observer hooks for pruning and incumbent updates

mod monitor;
mod reduced;
mod search;
mod state;
mod stats;

pub use monitor::{NoOpMonitor, SearchMonitor};
pub use search::{
    branch_and_bound, branch_and_bound_with_limit, SearchOutcome, DEFAULT_FRONTIER_LIMIT,
};
pub use stats::SearchStatistics;
