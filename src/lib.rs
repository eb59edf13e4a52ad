//! # span-routing
//!
//! Multi-vehicle route optimization over a precomputed cost matrix.
//! Assigns every stop to exactly one vehicle departing from a shared
//! depot, minimizing `total distance + span_coefficient * longest route`
//! under a per-route distance cap, using cheapest-arc construction and
//! deterministic local search (2-opt, or-opt, inter-route exchange).
//!
//! ## Modules
//!
//! - [`distance`] — Cost matrix, batched matrix acquisition, read-through cache
//! - [`index`] — Tour position ↔ physical node mapping with per-vehicle depot anchors
//! - [`models`] — Internal route/solution representation
//! - [`evaluation`] — Global span objective
//! - [`constructive`] — Cheapest-arc initial solution
//! - [`local_search`] — Improvement operators and search loop
//! - [`engine`] — Solve orchestration
//! - [`extract`] — Caller-facing route plan extraction
//!
//! ## Example
//!
//! ```
//! use span_routing::config::SolveConfig;
//! use span_routing::distance::CostMatrix;
//! use span_routing::engine::solve;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![0, 10, 15],
//!     vec![10, 0, 20],
//!     vec![15, 20, 0],
//! ])?;
//! let plan = solve(&matrix, 2, SolveConfig::default())?;
//! assert_eq!(plan.span, 30);
//! # Ok::<(), span_routing::error::Error>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod extract;
pub mod index;
pub mod local_search;
pub mod models;

pub use config::{CancelToken, SolveConfig};
pub use engine::{solve, SolverEngine};
pub use error::{Error, Result};
pub use extract::{RoutePlan, VehicleRoute};
