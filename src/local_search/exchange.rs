//! Inter-route node exchange step.
//!
//! # Algorithm
//!
//! Swaps one node of one route with one node of another route, keeping
//! each node's position. Candidates are scored against the full span
//! objective and must leave both affected routes within the distance cap.
//! Useful where a relocation alone cannot help because both routes sit
//! near the cap or the span.

use crate::distance::CostMatrix;
use crate::evaluation::SpanObjective;
use crate::models::Solution;

/// Applies the first improving single-node swap between two routes,
/// scanning route pairs and positions in a fixed order. Returns `true` if
/// a move was applied.
pub fn exchange_step(
    solution: &mut Solution,
    matrix: &CostMatrix,
    depot: usize,
    distance_cap: i64,
    objective: &SpanObjective,
) -> bool {
    let distances = solution.route_distances();
    let current_objective = objective.objective_of(&distances);
    let num_vehicles = solution.num_vehicles();

    for first in 0..num_vehicles {
        for second in first + 1..num_vehicles {
            for i in 0..solution.route(first).len() {
                for j in 0..solution.route(second).len() {
                    let mut first_nodes = solution.route(first).nodes().to_vec();
                    let mut second_nodes = solution.route(second).nodes().to_vec();
                    std::mem::swap(&mut first_nodes[i], &mut second_nodes[j]);

                    let first_cost = matrix.route_cost(&first_nodes, depot);
                    let second_cost = matrix.route_cost(&second_nodes, depot);
                    if first_cost > distance_cap || second_cost > distance_cap {
                        continue;
                    }

                    let mut trial = distances.clone();
                    trial[first] = first_cost;
                    trial[second] = second_cost;
                    if objective.objective_of(&trial) < current_objective {
                        solution.route_mut(first).replace(first_nodes, first_cost);
                        solution.route_mut(second).replace(second_nodes, second_cost);
                        return true;
                    }
                }
            }
        }
    }
    false
}
