//! Solve configuration and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Configuration parameters for a single solve.
///
/// # Examples
///
/// ```
/// use span_routing::config::SolveConfig;
///
/// let config = SolveConfig::default()
///     .with_distance_cap(50_000)
///     .with_span_coefficient(10);
/// assert_eq!(config.distance_cap, 50_000);
/// assert_eq!(config.span_coefficient, 10);
/// assert_eq!(config.depot, 0);
/// ```
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Physical node every vehicle starts and ends at.
    pub depot: usize,
    /// Hard upper bound on the cumulative distance of any route.
    pub distance_cap: i64,
    /// Weight of the longest route in the objective
    /// `total + span_coefficient * max`.
    pub span_coefficient: i64,
    /// Maximum number of local search iterations (full operator rounds).
    pub max_iterations: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            depot: 0,
            distance_cap: 150_000,
            span_coefficient: 100,
            max_iterations: 1_000,
        }
    }
}

impl SolveConfig {
    /// Sets the depot node.
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the per-route distance cap.
    pub fn with_distance_cap(mut self, cap: i64) -> Self {
        self.distance_cap = cap;
        self
    }

    /// Sets the global span coefficient.
    pub fn with_span_coefficient(mut self, coefficient: i64) -> Self {
        self.span_coefficient = coefficient;
        self
    }

    /// Sets the local search iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Checks parameter sanity independent of any problem instance.
    pub fn validate(&self) -> Result<()> {
        if self.distance_cap < 0 {
            return Err(Error::InvalidInput(format!(
                "distance cap must be non-negative, got {}",
                self.distance_cap
            )));
        }
        if self.span_coefficient < 0 {
            return Err(Error::InvalidInput(format!(
                "span coefficient must be non-negative, got {}",
                self.span_coefficient
            )));
        }
        Ok(())
    }
}

/// Cooperative cancellation signal checked at local search iteration
/// boundaries.
///
/// Cloning shares the underlying flag, so a caller can hand a clone to the
/// engine and trigger cancellation from another thread. An optional
/// deadline makes the token fire on its own once the wall clock passes it.
///
/// # Examples
///
/// ```
/// use span_routing::config::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Creates a token that never fires on its own.
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// Creates a token that fires once `timeout` has elapsed.
    pub fn with_deadline(timeout: Duration) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once `cancel` was called or the deadline passed.
    pub fn is_cancelled(&self) -> bool {
        if self.flag.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SolveConfig::default();
        assert_eq!(config.depot, 0);
        assert_eq!(config.distance_cap, 150_000);
        assert_eq!(config.span_coefficient, 100);
        assert_eq!(config.max_iterations, 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = SolveConfig::default()
            .with_depot(2)
            .with_max_iterations(5);
        assert_eq!(config.depot, 2);
        assert_eq!(config.max_iterations, 5);
    }

    #[test]
    fn test_config_rejects_negative_cap() {
        let config = SolveConfig::default().with_distance_cap(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cancel_token_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_deadline_in_past_fires() {
        let token = CancelToken::with_deadline(Duration::from_secs(0));
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_far_deadline_does_not_fire() {
        let token = CancelToken::with_deadline(Duration::from_secs(3600));
        assert!(!token.is_cancelled());
    }
}
