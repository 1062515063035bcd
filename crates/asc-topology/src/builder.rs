//! Topology construction
//!
//! | pattern           | shape         | edges                         |
//! |-------------------|---------------|-------------------------------|
//! | `sequential`      | chain         | `(i, i+1)` for `i in 0..n-1`  |
//! | `fully_connected` | complete      | every `(i, j)` with `i < j`   |
//! | `hub_and_spoke`   | star          | `(0, i)` for `i in 1..n`      |
//! | anything else     | placeholder   | `(i, (i+1) % n)` for each `i` |
//!
//! The placeholder reports a fixed connectivity of
//! [`PLACEHOLDER_CONNECTIVITY`] instead of a computed ratio. Like every other
//! shape it has no edges and connectivity 0 with fewer than two members.

use crate::graph::{connectivity_ratio, GraphEdge, GraphNode, TopologyGraph, TopologyShape};
use crate::style::{edge_style, node_style};
use asc_catalog::AgentRole;
use asc_planning::CollaborationPattern;

/// Connectivity reported for the placeholder topology
pub const PLACEHOLDER_CONNECTIVITY: f64 = 0.5;

impl From<CollaborationPattern> for TopologyShape {
    fn from(pattern: CollaborationPattern) -> Self {
        match pattern {
            CollaborationPattern::Sequential => TopologyShape::Chain,
            CollaborationPattern::FullyConnected => TopologyShape::Complete,
            CollaborationPattern::HubAndSpoke => TopologyShape::Star,
            CollaborationPattern::Pipeline => TopologyShape::Placeholder,
        }
    }
}

/// Build the graph for `roles` arranged by `pattern`
#[must_use]
pub fn build_graph(roles: &[AgentRole], pattern: CollaborationPattern) -> TopologyGraph {
    let shape = TopologyShape::from(pattern);
    if shape == TopologyShape::Placeholder {
        tracing::debug!(%pattern, nodes = roles.len(), "no dedicated topology, using placeholder");
    }
    build_shape(roles, shape)
}

/// Build the graph for a free-form pattern label
///
/// Labels that do not parse as a [`CollaborationPattern`] get the
/// placeholder topology.
#[must_use]
pub fn build_graph_from_label(roles: &[AgentRole], label: &str) -> TopologyGraph {
    match label.parse::<CollaborationPattern>() {
        Ok(pattern) => build_graph(roles, pattern),
        Err(e) => {
            tracing::warn!(error = %e, nodes = roles.len(), "unrecognized pattern, using placeholder");
            build_shape(roles, TopologyShape::Placeholder)
        }
    }
}

fn build_shape(roles: &[AgentRole], shape: TopologyShape) -> TopologyGraph {
    let n = roles.len();

    let nodes: Vec<GraphNode> = roles
        .iter()
        .enumerate()
        .map(|(id, &role)| {
            let style = node_style(role);
            GraphNode {
                id,
                role,
                label: format!("{role}_{id}"),
                color: style.color.to_string(),
                size: style.size,
            }
        })
        .collect();

    let pairs: Vec<(usize, usize)> = match shape {
        TopologyShape::Chain => (1..n).map(|i| (i - 1, i)).collect(),
        TopologyShape::Complete => (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect(),
        TopologyShape::Star => (1..n).map(|i| (0, i)).collect(),
        TopologyShape::Placeholder if n > 1 => (0..n).map(|i| (i, (i + 1) % n)).collect(),
        TopologyShape::Placeholder => Vec::new(),
    };

    let style = edge_style(shape);
    let edges: Vec<GraphEdge> = pairs
        .into_iter()
        .enumerate()
        .map(|(id, (from, to))| GraphEdge {
            id,
            from,
            to,
            weight: style.weight,
            color: style.color.to_string(),
        })
        .collect();

    let connectivity = match shape {
        TopologyShape::Placeholder if n > 1 => PLACEHOLDER_CONNECTIVITY,
        _ => connectivity_ratio(edges.len(), n),
    };

    tracing::debug!(?shape, nodes = n, edges = edges.len(), connectivity, "built topology");

    TopologyGraph {
        shape,
        nodes,
        edges,
        connectivity,
    }
}
