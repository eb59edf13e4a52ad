//! Internal solution representation.
//!
//! A [`Solution`] assigns every non-depot node to exactly one [`Route`];
//! the constructive solver creates it, the local search improver mutates
//! it in place, and the extractor reads it out.

mod route;
mod solution;

pub use route::Route;
pub use solution::Solution;
