//! Full vehicle-to-route assignment.

use super::Route;

/// A complete assignment of nodes to vehicle routes.
///
/// Holds exactly one [`Route`] per vehicle, empty routes included, so the
/// route list is always indexable by vehicle id. The partition invariant
/// (every non-depot node on exactly one route) is established by the
/// constructive solver and preserved by every local search move.
///
/// # Examples
///
/// ```
/// use span_routing::models::Solution;
///
/// let mut solution = Solution::new(2);
/// solution.route_mut(0).push(1);
/// solution.route_mut(0).set_distance(20);
/// solution.route_mut(1).push(2);
/// solution.route_mut(1).set_distance(30);
/// assert_eq!(solution.total_distance(), 50);
/// assert_eq!(solution.max_distance(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution with one empty route per vehicle.
    pub fn new(num_vehicles: usize) -> Self {
        Self {
            routes: (0..num_vehicles).map(Route::new).collect(),
        }
    }

    /// All routes, indexed by vehicle id.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The route of one vehicle.
    pub fn route(&self, vehicle: usize) -> &Route {
        &self.routes[vehicle]
    }

    /// Mutable access to one vehicle's route.
    pub fn route_mut(&mut self, vehicle: usize) -> &mut Route {
        &mut self.routes[vehicle]
    }

    /// Number of vehicles (and routes).
    pub fn num_vehicles(&self) -> usize {
        self.routes.len()
    }

    /// Cached distance of every route, indexed by vehicle id.
    pub fn route_distances(&self) -> Vec<i64> {
        self.routes.iter().map(Route::distance).collect()
    }

    /// Sum of all route distances.
    pub fn total_distance(&self) -> i64 {
        self.routes.iter().map(Route::distance).sum()
    }

    /// The global span: the longest route distance.
    pub fn max_distance(&self) -> i64 {
        self.routes.iter().map(Route::distance).max().unwrap_or(0)
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_route_per_vehicle() {
        let solution = Solution::new(3);
        assert_eq!(solution.num_vehicles(), 3);
        assert!(solution.routes().iter().all(Route::is_empty));
        assert_eq!(solution.route(2).vehicle_id(), 2);
    }

    #[test]
    fn test_distance_aggregates() {
        let mut solution = Solution::new(2);
        solution.route_mut(0).replace(vec![1, 2], 45);
        solution.route_mut(1).replace(vec![3], 30);
        assert_eq!(solution.route_distances(), vec![45, 30]);
        assert_eq!(solution.total_distance(), 75);
        assert_eq!(solution.max_distance(), 45);
        assert_eq!(solution.num_served(), 3);
    }

    #[test]
    fn test_empty_solution_aggregates() {
        let solution = Solution::new(0);
        assert_eq!(solution.total_distance(), 0);
        assert_eq!(solution.max_distance(), 0);
    }
}
