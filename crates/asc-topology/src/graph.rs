//! Graph descriptors
//!
//! [`TopologyGraph`] is the immutable result of topology construction. Node
//! ids are positions in the team's role sequence.

use crate::error::GraphError;
use asc_catalog::AgentRole;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

/// Edge layout family a graph was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyShape {
    /// Edge between consecutive members
    Chain,
    /// Edge between every unordered pair
    Complete,
    /// Edge from member 0 to every other member
    Star,
    /// One edge per member, to its successor (wrapping); fixed connectivity
    Placeholder,
}

/// One team member in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Position in the role sequence
    pub id: usize,
    /// Member role
    pub role: AgentRole,
    /// Display label, `"{ROLE}_{id}"`
    pub label: String,
    /// Hex fill color
    pub color: String,
    /// Relative display size
    pub size: u32,
}

/// One communication link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Position in the edge sequence
    pub id: usize,
    /// Source node id
    pub from: usize,
    /// Target node id
    pub to: usize,
    /// Link weight
    pub weight: f64,
    /// Hex stroke color
    pub color: String,
}

/// Team communication graph
///
/// Node ids equal their positions and every edge endpoint names a node.
/// Deserializing rejects graphs that break either rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGraph")]
pub struct TopologyGraph {
    pub(crate) shape: TopologyShape,
    pub(crate) nodes: Vec<GraphNode>,
    pub(crate) edges: Vec<GraphEdge>,
    pub(crate) connectivity: f64,
}

#[derive(Deserialize)]
struct RawGraph {
    shape: TopologyShape,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    connectivity: f64,
}

impl TryFrom<RawGraph> for TopologyGraph {
    type Error = GraphError;

    fn try_from(raw: RawGraph) -> Result<Self, Self::Error> {
        if let Some((position, node)) =
            raw.nodes.iter().enumerate().find(|(i, n)| n.id != *i)
        {
            return Err(GraphError::NodeIdMismatch {
                position,
                id: node.id,
            });
        }
        let nodes = raw.nodes.len();
        for edge in &raw.edges {
            if let Some(node) = [edge.from, edge.to].into_iter().find(|&n| n >= nodes) {
                return Err(GraphError::DanglingEdge {
                    edge: edge.id,
                    node,
                    nodes,
                });
            }
        }
        if !(0.0..=1.0).contains(&raw.connectivity) {
            return Err(GraphError::ConnectivityOutOfRange(raw.connectivity));
        }
        Ok(Self {
            shape: raw.shape,
            nodes: raw.nodes,
            edges: raw.edges,
            connectivity: raw.connectivity,
        })
    }
}

impl TopologyGraph {
    /// Edge layout family
    #[inline]
    #[must_use]
    pub fn shape(&self) -> TopologyShape {
        self.shape
    }

    /// Nodes in role order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edges in construction order
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Connectivity ratio in `[0, 1]`
    #[inline]
    #[must_use]
    pub fn connectivity(&self) -> f64 {
        self.connectivity
    }

    /// Role sequence the graph was built from
    #[must_use]
    pub fn roles(&self) -> Vec<AgentRole> {
        self.nodes.iter().map(|n| n.role).collect()
    }

    /// Number of edges touching `node` (a self-loop counts twice)
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.from == node) + usize::from(e.to == node))
            .sum()
    }

    /// Hub node of a star topology with at least two members
    #[must_use]
    pub fn hub(&self) -> Option<usize> {
        (self.shape == TopologyShape::Star && self.nodes.len() > 1).then_some(0)
    }

    /// Whether every member can reach every other (ignoring direction)
    ///
    /// An empty graph is not connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.nodes.is_empty() && petgraph::algo::connected_components(&self.to_petgraph()) == 1
    }

    /// petgraph view with roles as node weights and link weights as edge weights
    ///
    /// `NodeIndex::new(id)` addresses the node with that id.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<AgentRole, f64> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        for node in &self.nodes {
            graph.add_node(node.role);
        }
        for edge in &self.edges {
            graph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), edge.weight);
        }
        graph
    }
}

/// `edges / (n * (n - 1) / 2)`, or 0 when fewer than two nodes; capped at 1.0
#[must_use]
pub fn connectivity_ratio(edge_count: usize, node_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    let possible = (node_count * (node_count - 1)) as f64 / 2.0;
    (edge_count as f64 / possible).min(1.0)
}
