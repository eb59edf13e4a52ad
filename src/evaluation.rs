//! Objective evaluation.

use crate::models::Solution;

/// Evaluates solutions under the global span objective
/// `sum(route costs) + span_coefficient * max(route costs)`.
///
/// The span term weights fairness between vehicles against total
/// distance: the higher the coefficient, the more the solver equalizes
/// route lengths even at the expense of extra total distance.
///
/// # Examples
///
/// ```
/// use span_routing::evaluation::SpanObjective;
///
/// let objective = SpanObjective::new(100);
/// // Routes of 20 and 30: 50 + 100 * 30
/// assert_eq!(objective.objective_of(&[20, 30]), 3_050);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanObjective {
    span_coefficient: i64,
}

impl SpanObjective {
    /// Creates an objective with the given span coefficient.
    pub fn new(span_coefficient: i64) -> Self {
        Self { span_coefficient }
    }

    /// The configured span coefficient.
    pub fn span_coefficient(&self) -> i64 {
        self.span_coefficient
    }

    /// Objective value of a full solution.
    pub fn objective(&self, solution: &Solution) -> i64 {
        solution.total_distance() + self.span_coefficient * solution.max_distance()
    }

    /// Objective value of a hypothetical set of route costs.
    ///
    /// Used by local search operators to score a candidate move from the
    /// affected routes' new costs without mutating the solution.
    pub fn objective_of(&self, route_costs: &[i64]) -> i64 {
        let total: i64 = route_costs.iter().sum();
        let max = route_costs.iter().copied().max().unwrap_or(0);
        total + self.span_coefficient * max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_of_costs() {
        let objective = SpanObjective::new(10);
        assert_eq!(objective.objective_of(&[5, 7, 3]), 15 + 70);
        assert_eq!(objective.objective_of(&[]), 0);
    }

    #[test]
    fn test_objective_matches_solution() {
        let objective = SpanObjective::new(100);
        let mut solution = Solution::new(2);
        solution.route_mut(0).replace(vec![1], 20);
        solution.route_mut(1).replace(vec![2], 30);
        assert_eq!(objective.objective(&solution), 3_050);
        assert_eq!(
            objective.objective(&solution),
            objective.objective_of(&solution.route_distances())
        );
    }

    #[test]
    fn test_zero_coefficient_is_total_distance() {
        let objective = SpanObjective::new(0);
        assert_eq!(objective.objective_of(&[10, 20]), 30);
    }

    #[test]
    fn test_high_coefficient_prefers_balance() {
        let objective = SpanObjective::new(100);
        // Balanced routes beat a shorter total with a longer span.
        assert!(objective.objective_of(&[25, 25]) < objective.objective_of(&[5, 40]));
    }
}
