//! Display attributes for graph elements
//!
//! Renderers are free to ignore these; they travel with the graph so a
//! report layer does not need its own role → color table.

use crate::graph::TopologyShape;
use asc_catalog::AgentRole;

/// Node display attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    /// Hex fill color
    pub color: &'static str,
    /// Relative node size
    pub size: u32,
}

/// Edge display attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    /// Edge weight in `(0, 1]`
    pub weight: f64,
    /// Hex stroke color
    pub color: &'static str,
}

/// Style for a role
#[must_use]
pub fn node_style(role: AgentRole) -> NodeStyle {
    let color = match role {
        AgentRole::Io => "#FF6B6B",
        AgentRole::Tot => "#4ECDC4",
        AgentRole::Web => "#96CEB4",
        AgentRole::Code | AgentRole::Creative | AgentRole::Critic => "#DDA0DD",
    };
    let size = if role.is_deep_reasoner() { 20 } else { 15 };
    NodeStyle { color, size }
}

/// Style for edges of a shape
#[must_use]
pub fn edge_style(shape: TopologyShape) -> EdgeStyle {
    match shape {
        TopologyShape::Chain => EdgeStyle {
            weight: 0.8,
            color: "#2E8B57",
        },
        TopologyShape::Complete => EdgeStyle {
            weight: 0.6,
            color: "#4169E1",
        },
        TopologyShape::Star => EdgeStyle {
            weight: 0.7,
            color: "#DC143C",
        },
        TopologyShape::Placeholder => EdgeStyle {
            weight: 0.5,
            color: "#A9A9A9",
        },
    }
}
