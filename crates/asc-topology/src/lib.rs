//! ASC Topology
//!
//! Arranges a team into a communication graph and scores its connectivity.
//!
//! - [`build_graph`]: role sequence + [`CollaborationPattern`] → [`TopologyGraph`]
//! - [`build_graph_from_label`]: same, for free-form labels; unknown labels
//!   use the placeholder topology instead of failing
//!
//! Graphs are derived deterministically from their inputs and are immutable
//! once built. Renderers consume [`GraphNode`]/[`GraphEdge`] descriptors or
//! the petgraph view from [`TopologyGraph::to_petgraph`].
//!
//! [`CollaborationPattern`]: asc_planning::CollaborationPattern

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod error;
mod graph;
mod style;

pub use builder::{build_graph, build_graph_from_label, PLACEHOLDER_CONNECTIVITY};
pub use error::GraphError;
pub use graph::{connectivity_ratio, GraphEdge, GraphNode, TopologyGraph, TopologyShape};
pub use style::{edge_style, node_style, EdgeStyle, NodeStyle};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
