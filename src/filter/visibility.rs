//! Visible subgraph derivation
//!
//! [`compute_visible`] is a pure function of the canonical graph and the
//! toggle set. An edge survives only when both of its endpoints survive.

use super::toggles::TypeToggles;
use crate::graph::{CanonicalGraph, Category, Edge, GraphPayload, Node, RawEdge, RawNode};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nodes and edges left after category filtering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl VisibleGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every edge endpoint is a visible node
    pub fn is_closed(&self) -> bool {
        let ids: FxHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .all(|e| ids.contains(e.source.as_str()) && ids.contains(e.target.as_str()))
    }

    /// Set equality, ignoring order
    pub fn same_elements(&self, other: &VisibleGraph) -> bool {
        let nodes: FxHashSet<&Node> = self.nodes.iter().collect();
        let other_nodes: FxHashSet<&Node> = other.nodes.iter().collect();
        let edges: FxHashSet<&Edge> = self.edges.iter().collect();
        let other_edges: FxHashSet<&Edge> = other.edges.iter().collect();
        nodes == other_nodes && edges == other_edges
    }

    /// Wire form handed to the rendering surface
    pub fn to_payload(&self) -> GraphPayload {
        GraphPayload {
            nodes: self
                .nodes
                .iter()
                .map(|n| RawNode {
                    id: Some(n.id.to_string()),
                    label: Some(n.label.clone()),
                    category: n.category,
                    source: n.source.clone(),
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| RawEdge {
                    from: Some(e.source.as_str().into()),
                    to: Some(e.target.as_str().into()),
                    label: e.label.clone(),
                })
                .collect(),
        }
    }
}

/// Derive the visible subgraph for a toggle set
pub fn compute_visible(graph: &CanonicalGraph, toggles: &TypeToggles) -> VisibleGraph {
    let nodes: Vec<Node> = graph
        .nodes()
        .filter(|node| toggles.is_visible(node.category))
        .cloned()
        .collect();

    let visible_ids: FxHashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();

    let edges: Vec<Edge> = graph
        .edges()
        .iter()
        .filter(|edge| {
            visible_ids.contains(edge.source.as_str()) && visible_ids.contains(edge.target.as_str())
        })
        .cloned()
        .collect();

    VisibleGraph { nodes, edges }
}

/// Toggle state plus a one-entry memo of the last derivation
#[derive(Debug, Clone, Default)]
pub struct VisibilityFilter {
    toggles: TypeToggles,
    memo: Option<(u64, TypeToggles, VisibleGraph)>,
}

impl VisibilityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggles(toggles: TypeToggles) -> Self {
        VisibilityFilter { toggles, memo: None }
    }

    pub fn toggles(&self) -> &TypeToggles {
        &self.toggles
    }

    /// Flip one category
    pub fn toggle(&mut self, category: Category) -> bool {
        self.toggles.toggle(category)
    }

    pub fn set(&mut self, category: Category, visible: bool) {
        self.toggles.set(category, visible);
    }

    /// Visible subgraph of `graph` under the current toggles.
    ///
    /// Recomputed only when the snapshot id or the toggles differ from the
    /// previous call. Snapshot ids change with the graph contents, so the
    /// memo is never served for a clone or a mutated graph.
    pub fn visible(&mut self, graph: &CanonicalGraph) -> &VisibleGraph {
        let snapshot = graph.snapshot();
        let toggles = self.toggles;
        let fresh = matches!(&self.memo, Some((s, t, _)) if *s == snapshot && *t == toggles);

        if fresh {
            debug!("Visibility memo hit for snapshot {}", snapshot);
        } else {
            self.memo = None;
        }

        let (_, _, visible) = self.memo.get_or_insert_with(|| {
            debug!("Recomputing visible subgraph for snapshot {}", snapshot);
            (snapshot, toggles, compute_visible(graph, &toggles))
        });
        visible
    }

    /// Drop the memo, e.g. after the snapshot was replaced
    pub fn invalidate(&mut self) {
        self.memo = None;
    }
}
