use std::fmt;

use crate::models::Cost;

/// Statistics collected during one branch-and-bound run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total search states built, root included.
    pub states_created: u64,
    /// States discarded because their bound could not beat the incumbent,
    /// either when created or when popped.
    pub states_pruned: u64,
    /// States dropped unexplored to keep the frontier within its limit.
    pub states_discarded: u64,
    /// Largest frontier size observed.
    pub max_frontier_size: usize,
    /// Improving tours found by the search (the initial tour excluded).
    pub solutions_found: u64,
    /// The lower bound at the root state.
    pub root_lower_bound: Cost,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self {
            states_created: 0,
            states_pruned: 0,
            states_discarded: 0,
            max_frontier_size: 0,
            solutions_found: 0,
            root_lower_bound: Cost::ZERO,
        }
    }
}

impl SearchStatistics {
    #[inline]
    pub fn on_state_created(&mut self) {
        self.states_created = self.states_created.saturating_add(1);
    }

    #[inline]
    pub fn on_state_pruned(&mut self) {
        self.states_pruned = self.states_pruned.saturating_add(1);
    }

    #[inline]
    pub fn on_states_discarded(&mut self, count: u64) {
        self.states_discarded = self.states_discarded.saturating_add(count);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: Cost) {
        self.root_lower_bound = bound;
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  States created:    {}", self.states_created)?;
        writeln!(f, "  States pruned:     {}", self.states_pruned)?;
        writeln!(f, "  States discarded:  {}", self.states_discarded)?;
        writeln!(f, "  Max frontier size: {}", self.max_frontier_size)?;
        writeln!(f, "  Solutions found:   {}", self.solutions_found)?;
        writeln!(f, "  Root lower bound:  {}", self.root_lower_bound)?;
        Ok(())
    }
}
