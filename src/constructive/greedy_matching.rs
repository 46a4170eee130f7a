//! Greedy edge matching.
//!
//! # Algorithm
//!
//! Every city pair `(i, j)`, `i < j`, with at least one finite direction
//! becomes a candidate edge weighted by its cheaper direction. Candidates
//! are sorted by ascending weight (stable, so equal weights keep enumeration
//! order `(0,1), (0,2), …, (1,2), …`) and accepted greedily into path
//! fragments when
//!
//! - neither endpoint already has degree 2, and
//! - the edge joins two different fragments, unless it is the n-th edge,
//!   which closes the single remaining fragment into the full cycle.
//!
//! Fragments are tracked the way savings-based route merging tracks routes:
//! each city knows its fragment, each fragment its members, and merging
//! relabels the smaller fragment. The finished cycle is read in both
//! directions and the cheaper orientation is kept, so asymmetric scenarios
//! are handled.
//!
//! # Complexity
//!
//! O(n² log n), dominated by sorting the candidate edges.

use super::Construction;
use crate::distance::CostModel;
use crate::models::{Cost, Tour};
use crate::report::Termination;

/// A candidate edge in the arena.
#[derive(Debug)]
struct Edge {
    a: usize,
    b: usize,
    weight: f64,
}

/// Builds one tour by greedy matching of the cheapest edges.
///
/// Always a single attempt. If fewer than n edges can be accepted, or
/// neither orientation of the matched cycle is valid, the outcome has
/// `best = None`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::greedy_matching;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 0.0, 1.0),
/// ];
/// let cm = CostMatrix::from_cities(&cities);
/// let outcome = greedy_matching(&cm);
/// assert_eq!(outcome.attempts, 1);
/// let tour = outcome.best.unwrap();
/// assert!((tour.cost().value() - 4.0).abs() < 1e-10);
/// ```
pub fn greedy_matching<C: CostModel + ?Sized>(costs: &C) -> Construction {
    let n = costs.num_cities();
    let best = if n <= 2 {
        Some(Tour::from_route((0..n).collect(), costs))
    } else {
        match_edges(costs, n).map(|cycle| cheaper_orientation(cycle, costs))
    };
    Construction {
        best: best.filter(Tour::is_valid),
        attempts: 1,
        termination: Termination::Completed,
    }
}

/// Returns the matched cycle as a route starting at city 0, or `None` if
/// the candidates run out first.
fn match_edges<C: CostModel + ?Sized>(costs: &C, n: usize) -> Option<Vec<usize>> {
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for a in 0..n {
        for b in (a + 1)..n {
            if let Cost::Finite(weight) = costs.cost(a, b).min(costs.cost(b, a)) {
                edges.push(Edge { a, b, weight });
            }
        }
    }

    // `sort_by` is stable: ties keep enumeration order.
    edges.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut neighbors: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    let mut fragment_of: Vec<usize> = (0..n).collect();
    let mut fragment_members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut accepted = 0;

    for edge in &edges {
        if accepted == n {
            break;
        }
        if neighbors[edge.a].len() >= 2 || neighbors[edge.b].len() >= 2 {
            continue;
        }

        let fa = fragment_of[edge.a];
        let fb = fragment_of[edge.b];
        if fa == fb {
            // Only the final edge may close a cycle.
            if accepted != n - 1 {
                continue;
            }
        } else {
            let (keep, absorb) = if fragment_members[fa].len() >= fragment_members[fb].len() {
                (fa, fb)
            } else {
                (fb, fa)
            };
            let moved = std::mem::take(&mut fragment_members[absorb]);
            for &city in &moved {
                fragment_of[city] = keep;
            }
            fragment_members[keep].extend(moved);
        }

        neighbors[edge.a].push(edge.b);
        neighbors[edge.b].push(edge.a);
        accepted += 1;
    }

    if accepted < n {
        return None;
    }

    let mut route = Vec::with_capacity(n);
    let mut prev = 0;
    let mut current = 0;
    for _ in 0..n {
        route.push(current);
        let next = match neighbors[current].as_slice() {
            [x, y] => {
                if current == 0 || *x != prev {
                    *x
                } else {
                    *y
                }
            }
            _ => return None,
        };
        prev = current;
        current = next;
    }
    Some(route)
}

/// Builds both directed readings of `cycle` and keeps the cheaper one.
fn cheaper_orientation<C: CostModel + ?Sized>(cycle: Vec<usize>, costs: &C) -> Tour {
    let mut reversed = Vec::with_capacity(cycle.len());
    reversed.push(cycle[0]);
    reversed.extend(cycle[1..].iter().rev());

    let forward = Tour::from_route(cycle, costs);
    let backward = Tour::from_route(reversed, costs);
    if backward.cost() < forward.cost() {
        backward
    } else {
        forward
    }
}
