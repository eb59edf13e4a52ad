//! Conversion of the internal solution into caller-facing routes.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::evaluation::SpanObjective;
use crate::index::RoutingIndex;
use crate::models::Solution;

/// One vehicle's final route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRoute {
    /// The vehicle this route belongs to.
    pub vehicle_id: usize,
    /// Visited nodes in order; the depot is implicit at both ends.
    pub nodes: Vec<usize>,
    /// Realized route distance, both depot legs included.
    pub distance: i64,
}

/// The complete result of a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// One route per vehicle, indexed by vehicle id.
    pub routes: Vec<VehicleRoute>,
    /// Sum of all route distances.
    pub total_distance: i64,
    /// The longest route distance.
    pub span: i64,
    /// Objective value: `total_distance + span_coefficient * span`.
    pub objective: i64,
}

/// Walks each vehicle from its start anchor to its end anchor and emits
/// the ordered physical node sequence with its realized distance.
///
/// Distances are recomputed here as the sum of consecutive arc costs
/// along the emitted sequence, independent of whatever the search cached.
/// Pure read; the solution is not modified.
pub fn extract_plan(
    solution: &Solution,
    matrix: &CostMatrix,
    index: &RoutingIndex,
    objective: &SpanObjective,
) -> RoutePlan {
    let mut routes = Vec::with_capacity(index.num_vehicles());

    for vehicle in 0..index.num_vehicles() {
        let stops = solution.route(vehicle).nodes();

        // Traversal positions: start anchor, the stops (node positions map
        // to themselves), end anchor.
        let mut path = Vec::with_capacity(stops.len() + 2);
        path.push(index.start(vehicle));
        path.extend(stops.iter().copied());
        path.push(index.end(vehicle));

        let mut nodes = Vec::with_capacity(stops.len());
        for &position in &path {
            if index.is_start(position) || index.is_end(position) {
                continue; // depot anchors stay implicit in the output
            }
            nodes.push(index.to_node(position));
        }

        let distance = matrix.route_cost(&nodes, index.depot());
        routes.push(VehicleRoute {
            vehicle_id: vehicle,
            nodes,
            distance,
        });
    }

    let total_distance: i64 = routes.iter().map(|r| r.distance).sum();
    let span = routes.iter().map(|r| r.distance).max().unwrap_or(0);
    RoutePlan {
        routes,
        total_distance,
        span,
        objective: total_distance + objective.span_coefficient() * span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_matrix() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0, 10, 15],
            vec![10, 0, 20],
            vec![15, 20, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_extracts_routes_and_aggregates() {
        let matrix = triangle_matrix();
        let index = RoutingIndex::new(3, 2, 0).expect("valid");
        let objective = SpanObjective::new(100);

        let mut solution = Solution::new(2);
        solution.route_mut(0).replace(vec![1], 20);
        solution.route_mut(1).replace(vec![2], 30);

        let plan = extract_plan(&solution, &matrix, &index, &objective);
        assert_eq!(plan.routes.len(), 2);
        assert_eq!(plan.routes[0].vehicle_id, 0);
        assert_eq!(plan.routes[0].nodes, vec![1]);
        assert_eq!(plan.routes[0].distance, 20);
        assert_eq!(plan.routes[1].nodes, vec![2]);
        assert_eq!(plan.routes[1].distance, 30);
        assert_eq!(plan.total_distance, 50);
        assert_eq!(plan.span, 30);
        assert_eq!(plan.objective, 50 + 100 * 30);
    }

    #[test]
    fn test_distance_recomputed_from_arcs() {
        let matrix = triangle_matrix();
        let index = RoutingIndex::new(3, 1, 0).expect("valid");
        let objective = SpanObjective::new(100);

        // Deliberately stale cached distance: extraction must not trust it.
        let mut solution = Solution::new(1);
        solution.route_mut(0).replace(vec![1, 2], 9_999);

        let plan = extract_plan(&solution, &matrix, &index, &objective);
        assert_eq!(plan.routes[0].distance, 45);
        assert_eq!(plan.total_distance, 45);
    }

    #[test]
    fn test_empty_routes_extracted() {
        let matrix = triangle_matrix();
        let index = RoutingIndex::new(3, 3, 0).expect("valid");
        let objective = SpanObjective::new(100);

        let mut solution = Solution::new(3);
        solution.route_mut(1).replace(vec![1, 2], 45);

        let plan = extract_plan(&solution, &matrix, &index, &objective);
        assert_eq!(plan.routes[0].nodes, Vec::<usize>::new());
        assert_eq!(plan.routes[0].distance, 0);
        assert_eq!(plan.routes[2].distance, 0);
        assert_eq!(plan.span, 45);
    }
}
