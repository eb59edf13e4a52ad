//! Cost matrix storage and acquisition.
//!
//! - [`matrix`] — Dense integer cost matrix with checked lookups
//! - [`assemble`] — Batched acquisition of a full matrix from an external source
//! - [`cache`] — Read-through cache for sub-matrix responses

pub mod assemble;
pub mod cache;
pub mod matrix;

pub use assemble::{MatrixAssembler, MatrixBlock, MatrixSource, TravelMatrix, Waypoint};
pub use cache::ReadThroughCache;
pub use matrix::CostMatrix;
