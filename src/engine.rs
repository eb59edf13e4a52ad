//! Solve orchestration.
//!
//! A solve runs through the phases construction → improvement →
//! extraction over one immutable cost matrix. Construction failures
//! (infeasible instance, cancellation before anything feasible exists)
//! abort the call; once a feasible solution exists, cancellation only cuts
//! the improvement short and the best solution found so far is returned.

use tracing::debug;

use crate::config::{CancelToken, SolveConfig};
use crate::constructive::cheapest_arc;
use crate::distance::CostMatrix;
use crate::error::{Error, Result};
use crate::evaluation::SpanObjective;
use crate::extract::{extract_plan, RoutePlan};
use crate::index::RoutingIndex;
use crate::local_search::improve;

/// A configured route optimization over one cost matrix.
///
/// The engine borrows the matrix immutably and owns no shared state, so
/// independent solves may run on separate threads without coordination.
///
/// # Examples
///
/// ```
/// use span_routing::config::{CancelToken, SolveConfig};
/// use span_routing::distance::CostMatrix;
/// use span_routing::engine::SolverEngine;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).unwrap();
///
/// let engine = SolverEngine::new(&matrix, 2, SolveConfig::default()).unwrap();
/// let plan = engine.solve(&CancelToken::new()).unwrap();
/// assert_eq!(plan.span, 30);
/// assert_eq!(plan.total_distance, 50);
/// ```
pub struct SolverEngine<'a> {
    matrix: &'a CostMatrix,
    index: RoutingIndex,
    config: SolveConfig,
    objective: SpanObjective,
}

impl<'a> SolverEngine<'a> {
    /// Validates the inputs and prepares an engine.
    ///
    /// Fails with [`Error::InvalidInput`] on a zero vehicle count or bad
    /// configuration and [`Error::IndexOutOfRange`] when the depot lies
    /// outside the matrix.
    pub fn new(matrix: &'a CostMatrix, vehicle_count: usize, config: SolveConfig) -> Result<Self> {
        config.validate()?;
        let index = RoutingIndex::new(matrix.size(), vehicle_count, config.depot)?;
        let objective = SpanObjective::new(config.span_coefficient);
        Ok(Self {
            matrix,
            index,
            config,
            objective,
        })
    }

    /// Runs the full solve: cheapest-arc construction, local search
    /// improvement, extraction.
    ///
    /// `cancel` is checked before construction and at every improvement
    /// iteration boundary. Cancellation after construction returns the
    /// best plan found so far; before it, [`Error::Cancelled`].
    pub fn solve(&self, cancel: &CancelToken) -> Result<RoutePlan> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        debug!(
            nodes = self.index.num_nodes(),
            vehicles = self.index.num_vehicles(),
            cap = self.config.distance_cap,
            "constructing initial solution"
        );
        let mut solution = cheapest_arc(self.matrix, &self.index, self.config.distance_cap)?;

        debug!(
            objective = self.objective.objective(&solution),
            "improving"
        );
        improve(
            &mut solution,
            self.matrix,
            self.index.depot(),
            self.config.distance_cap,
            &self.objective,
            self.config.max_iterations,
            cancel,
        );

        let plan = extract_plan(&solution, self.matrix, &self.index, &self.objective);
        debug!(
            objective = plan.objective,
            span = plan.span,
            total = plan.total_distance,
            "solved"
        );
        Ok(plan)
    }
}

/// Solves in one call with a token that never fires.
///
/// # Examples
///
/// ```
/// use span_routing::config::SolveConfig;
/// use span_routing::distance::CostMatrix;
/// use span_routing::engine::solve;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 20],
///     vec![15, 20, 0],
/// ]).unwrap();
/// let plan = solve(&matrix, 1, SolveConfig::default()).unwrap();
/// assert_eq!(plan.routes[0].distance, 45);
/// ```
pub fn solve(matrix: &CostMatrix, vehicle_count: usize, config: SolveConfig) -> Result<RoutePlan> {
    SolverEngine::new(matrix, vehicle_count, config)?.solve(&CancelToken::new())
}
