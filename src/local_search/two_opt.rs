//! Intra-route 2-opt step.
//!
//! # Algorithm
//!
//! For each route and each pair of positions i ≤ j, reverse the segment
//! [i..=j] and keep the reversal if it shortens the route. The candidate
//! cost is recomputed from consecutive arcs, so the step is correct for
//! asymmetric matrices too.
//!
//! A strict intra-route reduction lowers the route's own cost while every
//! other route is untouched, so both objective terms (total and span) can
//! only go down and the distance cap cannot be violated.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::CostMatrix;
use crate::models::Solution;

/// Applies the first improving 2-opt reversal found, scanning vehicles and
/// positions in a fixed order. Returns `true` if a move was applied.
pub fn two_opt_step(solution: &mut Solution, matrix: &CostMatrix, depot: usize) -> bool {
    for vehicle in 0..solution.num_vehicles() {
        let route = solution.route(vehicle);
        let n = route.len();
        if n < 2 {
            continue;
        }
        let current_cost = route.distance();

        for i in 0..n - 1 {
            for j in i + 1..n {
                let mut candidate = route.nodes().to_vec();
                candidate[i..=j].reverse();
                let candidate_cost = matrix.route_cost(&candidate, depot);
                if candidate_cost < current_cost {
                    solution.route_mut(vehicle).replace(candidate, candidate_cost);
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes on a line at coordinates 0, 1, 2, 3.
    fn line_matrix() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0, 1, 2, 3],
            vec![1, 0, 1, 2],
            vec![2, 1, 0, 1],
            vec![3, 2, 1, 0],
        ])
        .expect("valid")
    }

    fn solution_with(nodes: Vec<usize>, matrix: &CostMatrix) -> Solution {
        let mut solution = Solution::new(1);
        let cost = matrix.route_cost(&nodes, 0);
        solution.route_mut(0).replace(nodes, cost);
        solution
    }

    #[test]
    fn test_fixes_crossing_order() {
        let matrix = line_matrix();
        // 0→2→1→3→0 = 2+1+2+3 = 8; optimal 0→1→2→3→0 = 6.
        let mut solution = solution_with(vec![2, 1, 3], &matrix);
        let mut applied = 0;
        while two_opt_step(&mut solution, &matrix, 0) {
            applied += 1;
        }
        assert!(applied >= 1);
        assert_eq!(solution.route(0).distance(), 6);
        assert_eq!(
            solution.route(0).distance(),
            matrix.route_cost(solution.route(0).nodes(), 0)
        );
    }

    #[test]
    fn test_no_move_on_optimal_route() {
        let matrix = line_matrix();
        let mut solution = solution_with(vec![1, 2, 3], &matrix);
        assert!(!two_opt_step(&mut solution, &matrix, 0));
        assert_eq!(solution.route(0).nodes(), &[1, 2, 3]);
    }

    #[test]
    fn test_short_routes_skipped() {
        let matrix = line_matrix();
        let mut solution = solution_with(vec![2], &matrix);
        assert!(!two_opt_step(&mut solution, &matrix, 0));
        let mut empty = Solution::new(1);
        assert!(!two_opt_step(&mut empty, &matrix, 0));
    }

    #[test]
    fn test_never_worsens() {
        let matrix = line_matrix();
        let mut solution = solution_with(vec![3, 1, 2], &matrix);
        let before = solution.route(0).distance();
        two_opt_step(&mut solution, &matrix, 0);
        assert!(solution.route(0).distance() <= before);
    }
}
