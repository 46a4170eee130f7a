//! End-to-end runs of the solver engine on small known instances.

use std::f64::consts::PI;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp::distance::CostMatrix;
use u_tsp::models::{City, Cost, Scenario, Tour};
use u_tsp::report::{Algorithm, Termination};
use u_tsp::{InitialBound, SolverConfig, TspError, TspSolver};

const INF: f64 = f64::INFINITY;

const ALL: [Algorithm; 6] = [
    Algorithm::Random,
    Algorithm::GreedyMatching,
    Algorithm::NearestNeighbor,
    Algorithm::FarthestNeighbor,
    Algorithm::CheapestInsertion,
    Algorithm::BranchAndBound,
];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pentagon() -> Scenario {
    let cities = (0..5)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / 5.0;
            City::new(i, angle.cos(), angle.sin())
        })
        .collect();
    Scenario::euclidean(cities).expect("valid")
}

/// Cheapest of the 24 directed cycles through city 0 (12 undirected).
fn pentagon_brute_force(scenario: &Scenario) -> f64 {
    let mut best = f64::INFINITY;
    for a in 1..5 {
        for b in 1..5 {
            for c in 1..5 {
                for d in 1..5 {
                    let route = vec![0, a, b, c, d];
                    if let Some(tour) = Tour::new(route, scenario) {
                        best = best.min(tour.cost().value());
                    }
                }
            }
        }
    }
    best
}

/// Uniform random points in a 1000 by 1000 square.
fn random_euclidean(n: usize, seed: u64) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);
    let cities = (0..n)
        .map(|i| City::new(i, rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    Scenario::euclidean(cities).expect("valid")
}

/// Soft budgets are polled between units of work, so a run may overshoot.
const SLACK: Duration = Duration::from_secs(1);

fn seeded(secs: f64) -> SolverConfig {
    SolverConfig::default().with_time_budget(secs).with_seed(2024)
}

#[test]
fn test_pentagon_optimum_is_perimeter() {
    init_logging();
    let scenario = pentagon();
    let side = 2.0 * (PI / 5.0).sin();
    let mut solver = TspSolver::new();
    solver.configure(&scenario);

    let result = solver.solve_branch_and_bound(10.0).expect("configured");
    assert!((result.cost.value() - 5.0 * side).abs() < 1e-9);
    assert!((result.cost.value() - pentagon_brute_force(&scenario)).abs() < 1e-9);
    assert_eq!(result.termination, Termination::Completed);

    let nn = solver.solve_nearest_neighbor(10.0).expect("configured");
    assert!((nn.cost.value() - 5.0 * side).abs() < 1e-9);
    assert_eq!(nn.count, 5);
}

#[test]
fn test_heuristics_never_beat_branch_and_bound() {
    init_logging();
    let cities = (0..8)
        .map(|i| City::new(i, (i * 37 % 11) as f64, (i * 53 % 13) as f64))
        .collect();
    let scenario = Scenario::euclidean(cities).expect("valid");
    let mut solver = TspSolver::with_config(seeded(10.0)).expect("valid");
    solver.configure(&scenario);

    let optimum = solver.solve_branch_and_bound(10.0).expect("configured");
    assert!(optimum.is_proven_optimal());
    for algorithm in ALL {
        let result = solver.solve(algorithm).expect("configured");
        assert!(result.is_feasible(), "{algorithm} found no tour");
        assert!(result.cost.value() >= optimum.cost.value() - 1e-9);
        let tour = result.solution.expect("feasible");
        let recomputed = Tour::new(tour.route().to_vec(), &scenario).expect("permutation");
        assert!((recomputed.cost().value() - tour.cost().value()).abs() < 1e-9);
    }
}

#[test]
fn test_isolated_city_is_infeasible_for_every_algorithm() {
    init_logging();
    let costs = CostMatrix::from_rows(&[
        vec![0.0, 1.0, 2.0, INF],
        vec![1.0, 0.0, 1.0, INF],
        vec![2.0, 1.0, 0.0, INF],
        vec![INF, INF, INF, 0.0],
    ])
    .expect("valid");
    let scenario = Scenario::from_matrix(costs).expect("valid");
    let mut solver = TspSolver::with_config(seeded(0.2)).expect("valid");
    solver.configure(&scenario);

    for algorithm in ALL {
        let result = solver.solve(algorithm).expect("configured");
        assert_eq!(result.cost, Cost::Unreachable, "{algorithm}");
        assert!(result.solution.is_none(), "{algorithm}");
    }

    let bnb = solver.solve_branch_and_bound(0.2).expect("configured");
    assert_eq!(bnb.termination, Termination::Completed);
}

#[test]
fn test_asymmetric_three_cities_picks_cheaper_direction() {
    let costs = CostMatrix::from_rows(&[
        vec![0.0, 1.0, 10.0],
        vec![10.0, 0.0, 1.0],
        vec![1.0, 10.0, 0.0],
    ])
    .expect("valid");
    let scenario = Scenario::from_matrix(costs).expect("valid");
    let mut solver = TspSolver::new();
    solver.configure(&scenario);

    for algorithm in [
        Algorithm::GreedyMatching,
        Algorithm::NearestNeighbor,
        Algorithm::CheapestInsertion,
        Algorithm::BranchAndBound,
    ] {
        let result = solver.solve(algorithm).expect("configured");
        assert_eq!(result.cost, Cost::Finite(3.0), "{algorithm}");
    }
}

#[test]
fn test_unconfigured_solver_reports_error() {
    let mut solver = TspSolver::new();
    for algorithm in ALL {
        assert_eq!(solver.solve(algorithm).unwrap_err(), TspError::NoScenarioBound);
    }
}

#[test]
fn test_random_respects_budget_on_infeasible_instance() {
    let costs = CostMatrix::from_rows(&[
        vec![0.0, 1.0, INF, INF],
        vec![INF, 0.0, 1.0, INF],
        vec![INF, INF, 0.0, INF],
        vec![INF, INF, INF, 0.0],
    ])
    .expect("valid");
    let scenario = Scenario::from_matrix(costs).expect("valid");
    let mut solver = TspSolver::with_config(seeded(0.3)).expect("valid");
    solver.configure(&scenario);

    let result = solver.solve_random(0.3).expect("configured");
    assert!(result.solution.is_none());
    assert_eq!(result.termination, Termination::TimeLimitReached);
    assert!(result.count > 0);
    assert!(result.elapsed >= Duration::from_millis(300));
    assert!(result.elapsed < Duration::from_secs(2));
}

#[test]
fn test_greedy_seeded_search_matches_default() {
    let scenario = pentagon();
    let mut default = TspSolver::new();
    let config = SolverConfig::default().with_initial_bound(InitialBound::GreedyMatching);
    let mut greedy = TspSolver::with_config(config).expect("valid");
    default.configure(&scenario);
    greedy.configure(&scenario);

    let a = default.solve_branch_and_bound(10.0).expect("configured");
    let b = greedy.solve_branch_and_bound(10.0).expect("configured");
    assert!((a.cost.value() - b.cost.value()).abs() < 1e-9);
}

#[test]
fn test_result_serializes_to_json() {
    let scenario = pentagon();
    let mut solver = TspSolver::new();
    solver.configure(&scenario);
    let result = solver.solve_branch_and_bound(10.0).expect("configured");

    let json = result.to_json().expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["algorithm"], "BranchAndBound");
    assert!(value["solution"]["route"].is_array());
    assert!(value["total_states_created"].as_u64().is_some_and(|n| n >= 1));
}

#[test]
fn test_branch_and_bound_stops_at_budget_with_feasible_tour() {
    init_logging();
    let scenario = random_euclidean(30, 7);
    let mut solver = TspSolver::with_config(seeded(0.5)).expect("valid");
    solver.configure(&scenario);

    let result = solver.solve_branch_and_bound(0.5).expect("configured");
    assert_eq!(result.termination, Termination::TimeLimitReached);
    assert!(!result.is_proven_optimal());
    assert!(result.elapsed >= Duration::from_millis(500));
    assert!(result.elapsed < Duration::from_millis(500) + SLACK);
    assert!(result.is_feasible());
    let tour = result.solution.expect("feasible");
    assert!(tour.is_valid());
    assert_eq!(tour.route().len(), 30);
}

#[test]
fn test_branch_and_bound_frontier_stays_within_limit() {
    init_logging();
    let scenario = random_euclidean(25, 11);
    let config = seeded(0.5).with_max_frontier(10_000);
    let mut solver = TspSolver::with_config(config).expect("valid");
    solver.configure(&scenario);

    let result = solver.solve_branch_and_bound(0.5).expect("configured");
    assert!(result.max_frontier_size.is_some_and(|size| size <= 10_000));
    assert!(result.elapsed < Duration::from_millis(500) + SLACK);
    assert!(result.is_feasible());
}

#[test]
fn test_nearest_neighbor_stops_at_budget() {
    let scenario = random_euclidean(800, 3);
    let mut solver = TspSolver::new();
    solver.configure(&scenario);

    let result = solver.solve_nearest_neighbor(0.05).expect("configured");
    assert_eq!(result.termination, Termination::TimeLimitReached);
    assert!(result.elapsed < Duration::from_millis(50) + SLACK);
    assert!(result.count > 0 && result.count < 800);
    assert!(result.is_feasible());
}

#[test]
fn test_cheapest_insertion_stops_at_budget() {
    let scenario = random_euclidean(300, 5);
    let mut solver = TspSolver::new();
    solver.configure(&scenario);

    let result = solver.solve_cheapest_insertion(0.1).expect("configured");
    assert_eq!(result.termination, Termination::TimeLimitReached);
    assert!(result.elapsed < Duration::from_millis(100) + SLACK);
    assert!(result.count > 0 && result.count < 300);
    assert!(result.is_feasible());
}
