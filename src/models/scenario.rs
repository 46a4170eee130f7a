//! Scenario: cities plus the cost model over them.

use super::{City, Cost};
use crate::distance::{CostMatrix, CostModel};
use crate::error::{Result, TspError};

/// An immutable TSP instance.
///
/// Cities are index-addressable; `cities()[i]` is the city with index `i`
/// in every tour and cost lookup.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Cost, Scenario};
/// use u_tsp::distance::CostModel;
///
/// let scenario = Scenario::euclidean(vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
/// ]).unwrap();
/// assert_eq!(scenario.num_cities(), 2);
/// assert_eq!(scenario.cost(1, 0), Cost::Finite(5.0));
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    cities: Vec<City>,
    costs: CostMatrix,
}

impl Scenario {
    /// Creates a scenario from cities and an explicit cost matrix.
    ///
    /// Fails if there are no cities, a city's id differs from its index, the
    /// matrix size does not match, or the matrix holds a negative cost.
    pub fn new(cities: Vec<City>, costs: CostMatrix) -> Result<Self> {
        if cities.is_empty() {
            return Err(TspError::MalformedScenario("scenario has no cities".into()));
        }
        if costs.size() != cities.len() {
            return Err(TspError::MalformedScenario(format!(
                "cost matrix is {0}x{0} but scenario has {1} cities",
                costs.size(),
                cities.len()
            )));
        }
        if let Some((index, city)) = cities.iter().enumerate().find(|(i, c)| c.id() != *i) {
            return Err(TspError::MalformedScenario(format!(
                "city at index {index} has id {}",
                city.id()
            )));
        }
        costs.validate()?;
        Ok(Self { cities, costs })
    }

    /// Creates a scenario with symmetric Euclidean costs between cities.
    pub fn euclidean(cities: Vec<City>) -> Result<Self> {
        let costs = CostMatrix::from_cities(&cities);
        Self::new(cities, costs)
    }

    /// Creates a scenario by sampling an arbitrary cost model.
    pub fn from_cost_model<C: CostModel + ?Sized>(cities: Vec<City>, model: &C) -> Result<Self> {
        Self::new(cities, CostMatrix::from_model(model))
    }

    /// Creates a scenario from a bare cost matrix, placing cities at the
    /// origin.
    ///
    /// Useful when only costs are known (e.g. asymmetric instances).
    pub fn from_matrix(costs: CostMatrix) -> Result<Self> {
        let cities = (0..costs.size()).map(|i| City::new(i, 0.0, 0.0)).collect();
        Self::new(cities, costs)
    }

    /// Cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The underlying cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }
}

impl CostModel for Scenario {
    fn num_cities(&self) -> usize {
        self.cities.len()
    }

    fn cost(&self, from: usize, to: usize) -> Cost {
        self.costs.get(from, to)
    }
}
