//! Solver engine bound to one scenario at a time.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{validate_time_budget, InitialBound, SolverConfig};
use crate::bnb::{branch_and_bound_with_limit, NoOpMonitor, SearchMonitor};
use crate::budget::TimeBudget;
use crate::constructive::{
    cheapest_insertion, greedy_matching, nearest_neighbor, random_tour, NeighborRule,
};
use crate::distance::CostModel;
use crate::error::{Result, TspError};
use crate::models::Scenario;
use crate::report::{Algorithm, ResultReporter, SolveResult};

/// TSP solver engine.
///
/// Borrows a [`Scenario`] through [`configure`](Self::configure) and runs
/// any of the solve entry points against it. Each run owns its incumbent
/// and statistics; nothing is shared between runs.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Scenario};
/// use u_tsp::solver::TspSolver;
///
/// let scenario = Scenario::euclidean(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ]).unwrap();
///
/// let mut solver = TspSolver::new();
/// solver.configure(&scenario);
/// let result = solver.solve_branch_and_bound(10.0).unwrap();
/// assert!((result.cost.value() - 4.0).abs() < 1e-10);
/// assert!(result.is_proven_optimal());
/// ```
#[derive(Debug)]
pub struct TspSolver<'a> {
    scenario: Option<&'a Scenario>,
    config: SolverConfig,
    rng: StdRng,
}

impl<'a> TspSolver<'a> {
    /// Creates an unconfigured solver with the default configuration.
    pub fn new() -> Self {
        Self::build(SolverConfig::default())
    }

    /// Creates an unconfigured solver after validating `config`.
    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SolverConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self {
            scenario: None,
            config,
            rng,
        }
    }

    /// Binds the solver to `scenario`, replacing any previous binding.
    ///
    /// With a fixed seed the random generator restarts, so identical
    /// scenarios yield identical random tours.
    pub fn configure(&mut self, scenario: &'a Scenario) {
        self.scenario = Some(scenario);
        if self.config.seed.is_some() {
            self.rng = seeded_rng(self.config.seed);
        }
    }

    /// The bound scenario, if any.
    pub fn scenario(&self) -> Option<&'a Scenario> {
        self.scenario
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs `algorithm` with the configured default time budget.
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<SolveResult> {
        let secs = self.config.time_budget;
        match algorithm {
            Algorithm::Random => self.solve_random(secs),
            Algorithm::GreedyMatching => self.solve_greedy_matching(secs),
            Algorithm::NearestNeighbor => self.solve_nearest_neighbor(secs),
            Algorithm::FarthestNeighbor => self.solve_farthest_neighbor(secs),
            Algorithm::CheapestInsertion => self.solve_cheapest_insertion(secs),
            Algorithm::BranchAndBound => self.solve_branch_and_bound(secs),
        }
    }

    /// Random permutations until a valid tour is found.
    pub fn solve_random(&mut self, time_budget: f64) -> Result<SolveResult> {
        let (scenario, budget) = self.begin(Algorithm::Random, time_budget)?;
        let outcome = random_tour(scenario, &budget, &mut self.rng);
        Ok(finish(ResultReporter::construction(
            Algorithm::Random,
            outcome,
            budget.elapsed(),
        )))
    }

    /// A single greedy matching pass.
    pub fn solve_greedy_matching(&mut self, time_budget: f64) -> Result<SolveResult> {
        let (scenario, budget) = self.begin(Algorithm::GreedyMatching, time_budget)?;
        let outcome = greedy_matching(scenario);
        Ok(finish(ResultReporter::construction(
            Algorithm::GreedyMatching,
            outcome,
            budget.elapsed(),
        )))
    }

    /// Nearest-neighbor walks from every start city.
    pub fn solve_nearest_neighbor(&mut self, time_budget: f64) -> Result<SolveResult> {
        self.solve_neighbor_walk(Algorithm::NearestNeighbor, NeighborRule::Nearest, time_budget)
    }

    /// Farthest-neighbor walks from every start city.
    pub fn solve_farthest_neighbor(&mut self, time_budget: f64) -> Result<SolveResult> {
        self.solve_neighbor_walk(Algorithm::FarthestNeighbor, NeighborRule::Farthest, time_budget)
    }

    fn solve_neighbor_walk(
        &mut self,
        algorithm: Algorithm,
        rule: NeighborRule,
        time_budget: f64,
    ) -> Result<SolveResult> {
        let (scenario, budget) = self.begin(algorithm, time_budget)?;
        let outcome = nearest_neighbor(scenario, rule, &budget);
        Ok(finish(ResultReporter::construction(
            algorithm,
            outcome,
            budget.elapsed(),
        )))
    }

    /// Cheapest insertion from every start city.
    pub fn solve_cheapest_insertion(&mut self, time_budget: f64) -> Result<SolveResult> {
        let (scenario, budget) = self.begin(Algorithm::CheapestInsertion, time_budget)?;
        let outcome = cheapest_insertion(scenario, &budget);
        Ok(finish(ResultReporter::construction(
            Algorithm::CheapestInsertion,
            outcome,
            budget.elapsed(),
        )))
    }

    /// Branch-and-bound seeded by the configured initial heuristic.
    pub fn solve_branch_and_bound(&mut self, time_budget: f64) -> Result<SolveResult> {
        self.solve_branch_and_bound_with_monitor(time_budget, &mut NoOpMonitor)
    }

    /// Branch-and-bound reporting search events to `monitor`.
    pub fn solve_branch_and_bound_with_monitor<M>(
        &mut self,
        time_budget: f64,
        monitor: &mut M,
    ) -> Result<SolveResult>
    where
        M: SearchMonitor + ?Sized,
    {
        let (scenario, budget) = self.begin(Algorithm::BranchAndBound, time_budget)?;
        let initial = match self.config.initial_bound {
            InitialBound::NearestNeighbor => {
                nearest_neighbor(scenario, NeighborRule::Nearest, &budget).best
            }
            InitialBound::GreedyMatching => greedy_matching(scenario).best,
        };
        let outcome = branch_and_bound_with_limit(
            scenario,
            initial,
            &budget,
            self.config.max_frontier,
            monitor,
        );
        Ok(finish(ResultReporter::search(outcome, budget.elapsed())))
    }

    /// Resolves the bound scenario and starts the run's budget.
    fn begin(&self, algorithm: Algorithm, time_budget: f64) -> Result<(&'a Scenario, TimeBudget)> {
        let scenario = self.scenario.ok_or(TspError::NoScenarioBound)?;
        validate_time_budget(time_budget)?;
        debug!(
            "{algorithm} start: {} cities, budget {time_budget}s",
            scenario.num_cities()
        );
        Ok((scenario, TimeBudget::from_secs(time_budget)))
    }
}

impl Default for TspSolver<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(result: SolveResult) -> SolveResult {
    debug!(
        "{} end: cost {}, count {}, {:?} in {:.3?}",
        result.algorithm, result.cost, result.count, result.termination, result.elapsed
    );
    result
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
