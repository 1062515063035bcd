//! Graph validation errors

use thiserror::Error;

/// Why a serialized graph was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Node id differs from its position
    #[error("node at position {position} has id {id}")]
    NodeIdMismatch {
        /// Position in the node list
        position: usize,
        /// Stored id
        id: usize,
    },

    /// Edge endpoint past the node list
    #[error("edge {edge} references node {node} but the graph has {nodes} nodes")]
    DanglingEdge {
        /// Edge id
        edge: usize,
        /// Offending endpoint
        node: usize,
        /// Node count
        nodes: usize,
    },

    /// Connectivity outside `[0, 1]` (or NaN)
    #[error("connectivity {0} is outside [0, 1]")]
    ConnectivityOutOfRange(f64),
}
