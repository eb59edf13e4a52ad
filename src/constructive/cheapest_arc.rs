//! Cheapest-arc constructive heuristic.
//!
//! # Algorithm
//!
//! Round-robin over the vehicles, one extension step each, lowest vehicle
//! id first. A step appends the unassigned node with the smallest arc
//! cost from the route's current tail, provided the route can still make
//! it back to the depot within the distance cap. A vehicle with no
//! affordable node is blocked; once every vehicle is blocked in a full
//! sweep while nodes remain, the instance is infeasible.
//!
//! Ties on arc cost break toward the lowest node id, so construction is
//! deterministic for identical inputs.
//!
//! # Complexity
//!
//! O(n² · vehicles) worst case.

use tracing::debug;

use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::index::RoutingIndex;
use crate::models::Solution;

/// Builds an initial feasible solution with round-robin cheapest-arc
/// extension under the per-route distance cap.
///
/// Returns [`Error::Infeasible`] when unassigned nodes remain but no
/// vehicle can take any of them without exceeding the cap.
///
/// # Examples
///
/// ```
/// use span_routing::constructive::cheapest_arc;
/// use span_routing::distance::CostMatrix;
/// use span_routing::index::RoutingIndex;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).unwrap();
/// let index = RoutingIndex::new(3, 1, 0).unwrap();
///
/// let solution = cheapest_arc(&matrix, &index, 150_000).unwrap();
/// assert_eq!(solution.num_served(), 2);
/// assert_eq!(solution.route(0).nodes(), &[1, 2]);
/// assert_eq!(solution.route(0).distance(), 45);
/// ```
pub fn cheapest_arc(
    matrix: &CostMatrix,
    index: &RoutingIndex,
    distance_cap: i64,
) -> Result<Solution> {
    let depot = index.depot();
    let num_vehicles = index.num_vehicles();

    let mut unassigned = vec![false; matrix.size()];
    let mut remaining = 0usize;
    for node in index.stop_nodes() {
        unassigned[node] = true;
        remaining += 1;
    }

    let mut solution = Solution::new(num_vehicles);
    // Route cost up to the tail, excluding the return leg.
    let mut path_costs = vec![0i64; num_vehicles];

    while remaining > 0 {
        let mut extended = false;

        for vehicle in 0..num_vehicles {
            if remaining == 0 {
                break;
            }
            let tail = solution
                .route(vehicle)
                .tail(index.to_node(index.start(vehicle)));

            // Cheapest affordable extension; ties toward the lowest node id.
            let mut best: Option<(i64, usize)> = None;
            for (node, &open) in unassigned.iter().enumerate() {
                if !open {
                    continue;
                }
                let reach = matrix.arc(tail, node);
                let total = path_costs[vehicle] + reach + matrix.arc(node, depot);
                if total > distance_cap {
                    continue;
                }
                if best.map_or(true, |(cost, _)| reach < cost) {
                    best = Some((reach, node));
                }
            }

            if let Some((reach, node)) = best {
                unassigned[node] = false;
                remaining -= 1;
                path_costs[vehicle] += reach;
                let route = solution.route_mut(vehicle);
                route.push(node);
                route.set_distance(path_costs[vehicle] + matrix.arc(node, depot));
                extended = true;
            }
        }

        if !extended {
            return Err(Error::Infeasible {
                unassigned: remaining,
            });
        }
    }

    debug!(
        vehicles = num_vehicles,
        served = solution.num_served(),
        total = solution.total_distance(),
        span = solution.max_distance(),
        "cheapest-arc construction finished"
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> CostMatrix {
        // Nodes on a line at 0, 1, 2, 3; cost = |i - j|.
        CostMatrix::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 1, 2],
            vec![2, 1, 0, 1],
            vec![3, 2, 1, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_single_vehicle_visits_all() {
        let matrix = line_matrix();
        let index = RoutingIndex::new(4, 1, 0).expect("valid");
        let solution = cheapest_arc(&matrix, &index, 1_000).expect("feasible");
        assert_eq!(solution.route(0).nodes(), &[1, 2, 3]);
        assert_eq!(solution.route(0).distance(), 6);
    }

    #[test]
    fn test_round_robin_spreads_nodes() {
        let matrix = line_matrix();
        let index = RoutingIndex::new(4, 2, 0).expect("valid");
        let solution = cheapest_arc(&matrix, &index, 1_000).expect("feasible");
        // Sweep 1: vehicle 0 takes node 1, vehicle 1 takes node 2.
        // Sweep 2: vehicle 0 extends first and takes node 3 from tail 1.
        assert_eq!(solution.route(0).nodes(), &[1, 3]);
        assert_eq!(solution.route(1).nodes(), &[2]);
        assert_eq!(solution.num_served(), 3);
    }

    #[test]
    fn test_tie_breaks_to_lowest_node() {
        // Nodes 1 and 2 both at arc cost 5 from the depot.
        let matrix = CostMatrix::from_rows(vec![
            vec![0, 5, 5],
            vec![5, 0, 5],
            vec![5, 5, 0],
        ])
        .expect("valid");
        let index = RoutingIndex::new(3, 1, 0).expect("valid");
        let solution = cheapest_arc(&matrix, &index, 1_000).expect("feasible");
        assert_eq!(solution.route(0).nodes(), &[1, 2]);
    }

    #[test]
    fn test_cap_blocks_overlong_route() {
        let matrix = line_matrix();
        let index = RoutingIndex::new(4, 2, 0).expect("valid");
        // Cap 6: both routes stay under the cap while covering all nodes.
        let solution = cheapest_arc(&matrix, &index, 6).expect("feasible");
        assert_eq!(solution.num_served(), 3);
        assert!(solution.routes().iter().all(|r| !r.is_empty()));
        for route in solution.routes() {
            assert!(route.distance() <= 6);
        }
    }

    #[test]
    fn test_infeasible_when_cap_too_small() {
        let matrix = line_matrix();
        let index = RoutingIndex::new(4, 2, 0).expect("valid");
        // Cheapest round trip to node 3 costs 6.
        let err = cheapest_arc(&matrix, &index, 5).unwrap_err();
        assert!(matches!(err, Error::Infeasible { unassigned: 1 }));
    }

    #[test]
    fn test_depot_only_instance() {
        let matrix = CostMatrix::from_rows(vec![vec![0]]).expect("valid");
        let index = RoutingIndex::new(1, 2, 0).expect("valid");
        let solution = cheapest_arc(&matrix, &index, 10).expect("feasible");
        assert_eq!(solution.num_served(), 0);
        assert!(solution.routes().iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_nonzero_depot() {
        let matrix = line_matrix();
        let index = RoutingIndex::new(4, 1, 2).expect("valid");
        let solution = cheapest_arc(&matrix, &index, 1_000).expect("feasible");
        let mut served: Vec<usize> = solution.route(0).nodes().to_vec();
        served.sort_unstable();
        assert_eq!(served, vec![0, 1, 3]);
    }
}
