//! Or-opt chain relocation step.
//!
//! # Algorithm
//!
//! Tries moving a contiguous chain of 1–3 nodes to another position on
//! the same route or onto a different vehicle's route. A candidate is
//! scored against the full span objective, so a move that lengthens one
//! route is still accepted when it shortens the longest route by more.
//! Candidates that would push an affected route past the distance cap are
//! discarded.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and
//! Their Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::CostMatrix;
use crate::evaluation::SpanObjective;
use crate::models::Solution;

/// Applies the first improving chain relocation found, scanning chain
/// starts, chain lengths, target routes, and insert positions in a fixed
/// order. Returns `true` if a move was applied.
pub fn or_opt_step(
    solution: &mut Solution,
    matrix: &CostMatrix,
    depot: usize,
    distance_cap: i64,
    objective: &SpanObjective,
) -> bool {
    let distances = solution.route_distances();
    let current_objective = objective.objective_of(&distances);

    for from in 0..solution.num_vehicles() {
        let from_nodes = solution.route(from).nodes().to_vec();
        for start in 0..from_nodes.len() {
            for len in 1..=3usize.min(from_nodes.len() - start) {
                let chain = &from_nodes[start..start + len];
                let mut reduced = from_nodes.clone();
                reduced.drain(start..start + len);
                let reduced_cost = matrix.route_cost(&reduced, depot);

                for to in 0..solution.num_vehicles() {
                    let target = if to == from {
                        &reduced
                    } else {
                        solution.route(to).nodes()
                    };

                    for position in 0..=target.len() {
                        if to == from && position == start {
                            continue; // putting the chain back where it was
                        }
                        let mut candidate = target.to_vec();
                        candidate.splice(position..position, chain.iter().copied());
                        let candidate_cost = matrix.route_cost(&candidate, depot);
                        if candidate_cost > distance_cap {
                            continue;
                        }

                        let mut trial = distances.clone();
                        trial[to] = candidate_cost;
                        if to != from {
                            trial[from] = reduced_cost;
                            if reduced_cost > distance_cap {
                                continue;
                            }
                        }
                        if objective.objective_of(&trial) < current_objective {
                            solution.route_mut(to).replace(candidate, candidate_cost);
                            if to != from {
                                solution
                                    .route_mut(from)
                                    .replace(reduced.clone(), reduced_cost);
                            }
                            return true;
                        }
                    }
                }
            }
        }
    }
    false
}
