//! Random permutation construction.
//!
//! Draws uniformly random permutations until one forms a valid tour. On
//! dense scenarios the first draw almost always succeeds; on sparse ones
//! the loop may run until the budget expires.

use rand::seq::SliceRandom;
use rand::Rng;

use super::Construction;
use crate::budget::TimeBudget;
use crate::distance::CostModel;
use crate::models::Tour;
use crate::report::Termination;

/// Draws random permutations until one has finite cost or `budget` expires.
///
/// `attempts` counts permutations drawn. An expired budget without a valid
/// tour yields `best = None` and [`Termination::TimeLimitReached`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::models::City;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::random_tour;
/// use u_tsp::TimeBudget;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 1.0, 1.0),
/// ];
/// let cm = CostMatrix::from_cities(&cities);
/// let mut rng = StdRng::seed_from_u64(7);
/// let outcome = random_tour(&cm, &TimeBudget::from_secs(1.0), &mut rng);
/// assert_eq!(outcome.attempts, 1);
/// assert!(outcome.best.is_some());
/// ```
pub fn random_tour<C, R>(costs: &C, budget: &TimeBudget, rng: &mut R) -> Construction
where
    C: CostModel + ?Sized,
    R: Rng + ?Sized,
{
    let n = costs.num_cities();
    let mut perm: Vec<usize> = (0..n).collect();
    let mut attempts = 0;

    while !budget.is_exhausted() {
        perm.shuffle(rng);
        attempts += 1;
        let tour = Tour::from_route(perm.clone(), costs);
        if tour.is_valid() {
            return Construction {
                best: Some(tour),
                attempts,
                termination: Termination::Completed,
            };
        }
    }

    Construction {
        best: None,
        attempts,
        termination: Termination::TimeLimitReached,
    }
}
