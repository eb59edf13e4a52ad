//! Error types shared across the crate.

use std::fmt;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the routing engine and the matrix assembly layer.
///
/// Construction failures are fatal to a solve and propagate immediately.
/// The local search improver only ever applies feasibility-preserving
/// moves, so it cannot produce an error on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A node index fell outside `[0, size)` of the cost matrix.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes in the matrix.
        size: usize,
    },
    /// No assignment satisfies the distance cap for the given matrix and
    /// vehicle count.
    Infeasible {
        /// Nodes still unassigned when every vehicle was blocked.
        unassigned: usize,
    },
    /// The solve was cancelled before a feasible solution existed.
    Cancelled,
    /// Malformed engine input (non-square matrix, zero vehicles, bad
    /// depot, negative cost, invalid configuration).
    InvalidInput(String),
    /// A sub-matrix request to the external source failed; the whole
    /// matrix request fails with it.
    MatrixFetch(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, size } => {
                write!(f, "node index {index} out of range for {size} nodes")
            }
            Error::Infeasible { unassigned } => {
                write!(
                    f,
                    "no feasible assignment: {unassigned} node(s) left unassigned under the distance cap"
                )
            }
            Error::Cancelled => write!(f, "solve cancelled before a feasible solution was found"),
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::MatrixFetch(msg) => write!(f, "matrix fetch failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let e = Error::IndexOutOfRange { index: 7, size: 5 };
        assert_eq!(e.to_string(), "node index 7 out of range for 5 nodes");
    }

    #[test]
    fn test_display_infeasible() {
        let e = Error::Infeasible { unassigned: 3 };
        assert!(e.to_string().contains("3 node(s)"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::Cancelled);
    }
}
