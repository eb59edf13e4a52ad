//! Local search improvement of a constructed solution.
//!
//! - [`two_opt`] — Intra-route segment reversal
//! - [`or_opt`] — Chain relocation within or across routes
//! - [`exchange`] — Single-node swap between routes
//!
//! Every operator applies the first improving move it finds in a fixed
//! scan order and scores candidates against the full span objective, so
//! results are reproducible for identical inputs. An accepted move never
//! pushes a route past the distance cap: the improver cannot make a
//! feasible solution infeasible.

mod exchange;
mod or_opt;
mod two_opt;

pub use exchange::exchange_step;
pub use or_opt::or_opt_step;
pub use two_opt::two_opt_step;

use tracing::debug;

use crate::config::CancelToken;
use crate::distance::CostMatrix;
use crate::evaluation::SpanObjective;
use crate::models::Solution;

/// Improves `solution` in place until no operator finds an improving move,
/// the iteration budget runs out, or `cancel` fires.
///
/// One iteration applies at most one move (2-opt, then or-opt, then
/// exchange, first hit wins). Returns the number of accepted moves; the
/// solution left behind is the best one visited, since every accepted
/// move strictly lowers the objective.
pub fn improve(
    solution: &mut Solution,
    matrix: &CostMatrix,
    depot: usize,
    distance_cap: i64,
    objective: &SpanObjective,
    max_iterations: usize,
    cancel: &CancelToken,
) -> usize {
    let mut moves = 0;
    for _ in 0..max_iterations {
        if cancel.is_cancelled() {
            debug!(moves, "local search cancelled");
            return moves;
        }
        let improved = two_opt_step(solution, matrix, depot)
            || or_opt_step(solution, matrix, depot, distance_cap, objective)
            || exchange_step(solution, matrix, depot, distance_cap, objective);
        if !improved {
            break;
        }
        moves += 1;
    }
    debug!(
        moves,
        objective = objective.objective(solution),
        span = solution.max_distance(),
        "local search finished"
    );
    moves
}
