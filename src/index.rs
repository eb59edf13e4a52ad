//! Mapping between tour positions and physical nodes.

use crate::error::{Error, Result};

/// Maps the solver's tour positions onto physical matrix nodes.
///
/// Every vehicle gets its own virtual start and end anchor, all bound to
/// the shared physical depot. Keeping the anchors distinct avoids aliasing
/// when several vehicles begin and end at the same location: a traversal
/// position identifies exactly one (vehicle, endpoint) pair even though
/// `to_node` collapses them all onto the depot.
///
/// Position layout for `n` nodes and `v` vehicles:
///
/// ```text
/// [0, n)            physical nodes (identity mapping)
/// [n, n + v)        start anchor of vehicle (pos - n)
/// [n + v, n + 2v)   end anchor of vehicle (pos - n - v)
/// ```
///
/// # Examples
///
/// ```
/// use span_routing::index::RoutingIndex;
///
/// let index = RoutingIndex::new(5, 2, 0).unwrap();
/// assert_eq!(index.start(1), 6);
/// assert_eq!(index.to_node(index.start(1)), 0);
/// assert!(index.is_end(index.end(0)));
/// assert!(!index.is_end(index.start(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingIndex {
    num_nodes: usize,
    num_vehicles: usize,
    depot: usize,
}

impl RoutingIndex {
    /// Creates an index space for `num_nodes` physical nodes and
    /// `num_vehicles` vehicles anchored at `depot`.
    pub fn new(num_nodes: usize, num_vehicles: usize, depot: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(Error::InvalidInput("matrix has no nodes".into()));
        }
        if num_vehicles == 0 {
            return Err(Error::InvalidInput("vehicle count must be positive".into()));
        }
        if depot >= num_nodes {
            return Err(Error::IndexOutOfRange {
                index: depot,
                size: num_nodes,
            });
        }
        Ok(Self {
            num_nodes,
            num_vehicles,
            depot,
        })
    }

    /// Start anchor position for `vehicle`.
    ///
    /// # Panics
    ///
    /// Panics if `vehicle` is out of range.
    pub fn start(&self, vehicle: usize) -> usize {
        assert!(vehicle < self.num_vehicles, "vehicle out of range");
        self.num_nodes + vehicle
    }

    /// End anchor position for `vehicle`.
    ///
    /// # Panics
    ///
    /// Panics if `vehicle` is out of range.
    pub fn end(&self, vehicle: usize) -> usize {
        assert!(vehicle < self.num_vehicles, "vehicle out of range");
        self.num_nodes + self.num_vehicles + vehicle
    }

    /// Returns `true` if `position` is any vehicle's start anchor.
    pub fn is_start(&self, position: usize) -> bool {
        (self.num_nodes..self.num_nodes + self.num_vehicles).contains(&position)
    }

    /// Returns `true` if `position` is any vehicle's end anchor.
    pub fn is_end(&self, position: usize) -> bool {
        (self.num_nodes + self.num_vehicles..self.num_positions()).contains(&position)
    }

    /// Physical node for a traversal position: anchors map to the depot,
    /// node positions map to themselves.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the position space.
    pub fn to_node(&self, position: usize) -> usize {
        assert!(position < self.num_positions(), "position out of range");
        if position < self.num_nodes {
            position
        } else {
            self.depot
        }
    }

    /// Total number of positions: nodes plus one start and one end anchor
    /// per vehicle.
    pub fn num_positions(&self) -> usize {
        self.num_nodes + 2 * self.num_vehicles
    }

    /// Number of physical nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// The shared physical depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Iterates over the physical nodes every solution must visit
    /// (all nodes except the depot).
    pub fn stop_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_nodes).filter(move |&node| node != self.depot)
    }
}
