//! A single vehicle's route.

/// An ordered sequence of nodes assigned to one vehicle.
///
/// The route begins and ends at the depot, which is implicit and never
/// stored in the node sequence. The cached distance covers both depot
/// legs and is maintained by whoever mutates the sequence.
///
/// # Examples
///
/// ```
/// use span_routing::models::Route;
///
/// let mut route = Route::new(0);
/// assert!(route.is_empty());
/// route.push(3);
/// route.set_distance(60);
/// assert_eq!(route.nodes(), &[3]);
/// assert_eq!(route.distance(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    vehicle_id: usize,
    nodes: Vec<usize>,
    distance: i64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            nodes: Vec::new(),
            distance: 0,
        }
    }

    /// The vehicle owning this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// The visited nodes in traversal order (depot excluded).
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Appends a node to the end of the route.
    pub fn push(&mut self, node: usize) {
        self.nodes.push(node);
    }

    /// Replaces the node sequence and its cached distance in one step.
    pub fn replace(&mut self, nodes: Vec<usize>, distance: i64) {
        self.nodes = nodes;
        self.distance = distance;
    }

    /// The node the route currently ends on, or the depot if empty.
    pub fn tail(&self, depot: usize) -> usize {
        self.nodes.last().copied().unwrap_or(depot)
    }

    /// Cached total distance, including both depot legs.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Updates the cached distance.
    pub fn set_distance(&mut self, distance: i64) {
        self.distance = distance;
    }

    /// Number of stops on this route.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the route visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let route = Route::new(2);
        assert_eq!(route.vehicle_id(), 2);
        assert!(route.is_empty());
        assert_eq!(route.distance(), 0);
        assert_eq!(route.tail(5), 5);
    }

    #[test]
    fn test_route_push_and_tail() {
        let mut route = Route::new(0);
        route.push(4);
        route.push(1);
        assert_eq!(route.nodes(), &[4, 1]);
        assert_eq!(route.tail(0), 1);
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn test_route_replace() {
        let mut route = Route::new(0);
        route.push(1);
        route.replace(vec![2, 3], 77);
        assert_eq!(route.nodes(), &[2, 3]);
        assert_eq!(route.distance(), 77);
    }
}
