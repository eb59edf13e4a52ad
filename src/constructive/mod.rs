//! Constructive heuristics producing an initial feasible solution.
//!
//! - [`cheapest_arc`] — Round-robin cheapest-arc greedy construction

mod cheapest_arc;

pub use cheapest_arc::cheapest_arc;
