//! Batched acquisition of a full travel matrix.
//!
//! External distance providers bound the size of a single request (the
//! original limit is 10×10 origin/destination pairs). The assembler tiles
//! the full coordinate list into provider-sized blocks, fetches each block
//! through a [`ReadThroughCache`], and stitches the responses into one
//! complete matrix. Any block failure fails the whole request: the engine
//! never receives a partial matrix.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cache::ReadThroughCache;
use super::matrix::CostMatrix;
use crate::error::{Error, Result};

/// A geographic coordinate submitted to the matrix source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Waypoint {
    /// Creates a waypoint.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Cache-key rendering, stable to 6 decimal places (~0.1 m).
    fn key(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lon)
    }
}

/// One provider response: distances and durations for a block of
/// origin/destination pairs, row per origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixBlock {
    /// Travel distances (e.g. meters).
    pub distances: Vec<Vec<i64>>,
    /// Travel durations (e.g. seconds).
    pub durations: Vec<Vec<i64>>,
}

/// A complete assembled matrix pair for one coordinate list.
#[derive(Debug, Clone)]
pub struct TravelMatrix {
    /// Pairwise travel distances.
    pub distances: CostMatrix,
    /// Pairwise travel durations.
    pub durations: CostMatrix,
}

/// An external source of travel matrix blocks.
///
/// Implementations wrap whatever transport the surrounding system uses;
/// the assembler only requires that a block request either returns a
/// complete `origins.len()` × `destinations.len()` block or fails.
pub trait MatrixSource {
    /// Fetches one block of the travel matrix.
    fn fetch_block(&self, origins: &[Waypoint], destinations: &[Waypoint])
        -> Result<MatrixBlock>;
}

/// Assembles full travel matrices from block-limited sources.
///
/// # Examples
///
/// ```
/// use span_routing::distance::{MatrixAssembler, MatrixBlock, MatrixSource, Waypoint};
/// use span_routing::error::Result;
///
/// struct Grid;
/// impl MatrixSource for Grid {
///     fn fetch_block(&self, origins: &[Waypoint], dests: &[Waypoint]) -> Result<MatrixBlock> {
///         let cell = |a: &Waypoint, b: &Waypoint| {
///             ((a.lat - b.lat).abs() + (a.lon - b.lon).abs()) as i64
///         };
///         let distances: Vec<Vec<i64>> = origins
///             .iter()
///             .map(|o| dests.iter().map(|d| cell(o, d)).collect())
///             .collect();
///         Ok(MatrixBlock { durations: distances.clone(), distances })
///     }
/// }
///
/// let points: Vec<Waypoint> = (0..25).map(|i| Waypoint::new(i as f64, 0.0)).collect();
/// let assembler = MatrixAssembler::new(Grid);
/// let matrix = assembler.assemble(&points).unwrap();
/// assert_eq!(matrix.distances.size(), 25);
/// assert_eq!(matrix.distances.arc(0, 24), 24);
/// ```
pub struct MatrixAssembler<S> {
    source: S,
    cache: ReadThroughCache<String, MatrixBlock>,
    max_block: usize,
}

impl<S: MatrixSource> MatrixAssembler<S> {
    /// Creates an assembler with the default 10×10 block limit.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: ReadThroughCache::new(),
            max_block: 10,
        }
    }

    /// Overrides the per-request block limit.
    pub fn with_max_block(mut self, max_block: usize) -> Self {
        assert!(max_block > 0, "block limit must be positive");
        self.max_block = max_block;
        self
    }

    /// Fetches and stitches the full n×n travel matrix for `points`.
    ///
    /// Identical blocks (same origin and destination coordinates) are
    /// fetched from the source at most once per assembler.
    pub fn assemble(&self, points: &[Waypoint]) -> Result<TravelMatrix> {
        let n = points.len();
        let mut distances = vec![0i64; n * n];
        let mut durations = vec![0i64; n * n];

        for origin_start in (0..n).step_by(self.max_block) {
            let origins = &points[origin_start..n.min(origin_start + self.max_block)];
            for dest_start in (0..n).step_by(self.max_block) {
                let dests = &points[dest_start..n.min(dest_start + self.max_block)];
                let block = self.fetch_cached(origins, dests)?;
                validate_block(&block, origins.len(), dests.len())?;

                for (i, (dist_row, dur_row)) in
                    block.distances.iter().zip(&block.durations).enumerate()
                {
                    let row = (origin_start + i) * n + dest_start;
                    distances[row..row + dests.len()].copy_from_slice(dist_row);
                    durations[row..row + dests.len()].copy_from_slice(dur_row);
                }
            }
        }

        Ok(TravelMatrix {
            distances: CostMatrix::from_data(n, distances)?,
            durations: CostMatrix::from_data(n, durations)?,
        })
    }

    fn fetch_cached(&self, origins: &[Waypoint], dests: &[Waypoint]) -> Result<MatrixBlock> {
        let key = block_key(origins, dests);
        let block = self.cache.get_or_compute(key.clone(), || {
            debug!(block = %key, origins = origins.len(), destinations = dests.len(),
                   "fetching matrix block");
            self.source.fetch_block(origins, dests)
        })?;
        Ok((*block).clone())
    }
}

/// Request signature for one block, mirroring the provider's
/// origins/destinations parameters.
fn block_key(origins: &[Waypoint], dests: &[Waypoint]) -> String {
    let join = |points: &[Waypoint]| {
        points
            .iter()
            .map(Waypoint::key)
            .collect::<Vec<_>>()
            .join("|")
    };
    format!("{};{}", join(origins), join(dests))
}

fn validate_block(block: &MatrixBlock, origins: usize, dests: usize) -> Result<()> {
    let complete = |rows: &Vec<Vec<i64>>| {
        rows.len() == origins && rows.iter().all(|row| row.len() == dests)
    };
    if !complete(&block.distances) || !complete(&block.durations) {
        return Err(Error::MatrixFetch(format!(
            "source returned an incomplete {origins}x{dests} block"
        )));
    }
    Ok(())
}
