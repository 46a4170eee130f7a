//! Cheapest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from a single city, grow a cyclic partial tour. Each round
//! evaluates every unvisited city `c` at every edge slot `(r[i], r[i+1])`
//! (wrapping around) with
//!
//! ```text
//! delta = d(r[i], c) + d(c, r[i+1]) - d(r[i], r[i+1])
//! ```
//!
//! and inserts the globally cheapest `(city, slot)` pair. Every edge of the
//! partial tour stays finite, so `delta` is finite whenever both new edges
//! exist. Like the nearest-neighbor walk, the construction restarts from
//! every city and keeps the cheapest valid tour.
//!
//! # Complexity
//!
//! O(n³) per start, O(n⁴) for all starts.

use super::{keep_if_better, Construction};
use crate::budget::TimeBudget;
use crate::distance::CostModel;
use crate::models::{Cost, Tour};
use crate::report::Termination;

/// Runs cheapest insertion from start cities 0, 1, 2, … until every start
/// has been tried or `budget` expires.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::cheapest_insertion;
/// use u_tsp::TimeBudget;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 4.0, 0.0),
///     City::new(2, 4.0, 3.0),
///     City::new(3, 0.0, 3.0),
/// ];
/// let cm = CostMatrix::from_cities(&cities);
/// let outcome = cheapest_insertion(&cm, &TimeBudget::from_secs(1.0));
/// assert!((outcome.best.unwrap().cost().value() - 14.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion<C: CostModel + ?Sized>(costs: &C, budget: &TimeBudget) -> Construction {
    let n = costs.num_cities();
    let mut best: Option<Tour> = None;
    let mut attempts = 0;

    for start in 0..n {
        if budget.is_exhausted() {
            return Construction {
                best,
                attempts,
                termination: Termination::TimeLimitReached,
            };
        }
        attempts += 1;
        if let Some(route) = insert_from(costs, start) {
            keep_if_better(&mut best, Tour::from_route(route, costs));
        }
    }

    Construction {
        best,
        attempts,
        termination: Termination::Completed,
    }
}

/// Builds a full cycle from `start`, or `None` once some unvisited city has
/// no finite insertion slot. Ties go to the lowest city, then the earliest
/// slot.
fn insert_from<C: CostModel + ?Sized>(costs: &C, start: usize) -> Option<Vec<usize>> {
    let n = costs.num_cities();
    let mut in_tour = vec![false; n];
    in_tour[start] = true;
    let mut route = Vec::with_capacity(n);
    route.push(start);

    while route.len() < n {
        // (city, insert position, delta)
        let mut chosen: Option<(usize, usize, Cost)> = None;
        let len = route.len();

        for city in 0..n {
            if in_tour[city] {
                continue;
            }
            for slot in 0..len {
                let delta = insertion_delta(costs, &route, slot, city);
                if delta.is_unreachable() {
                    continue;
                }
                if chosen.as_ref().is_none_or(|c| delta < c.2) {
                    chosen = Some((city, slot + 1, delta));
                }
            }
        }

        let (city, pos, _) = chosen?;
        route.insert(pos, city);
        in_tour[city] = true;
    }

    Some(route)
}

/// Cost change of placing `city` between `route[slot]` and its cyclic
/// successor.
fn insertion_delta<C: CostModel + ?Sized>(
    costs: &C,
    route: &[usize],
    slot: usize,
    city: usize,
) -> Cost {
    let prev = route[slot];
    if route.len() == 1 {
        return costs.cost(prev, city) + costs.cost(city, prev);
    }
    let next = route[(slot + 1) % route.len()];
    let added = costs.cost(prev, city) + costs.cost(city, next);
    match costs.cost(prev, next) {
        Cost::Finite(removed) => added.minus(removed),
        Cost::Unreachable => Cost::Unreachable,
    }
}
