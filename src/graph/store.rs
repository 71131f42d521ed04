//! Canonical in-memory graph snapshot
//!
//! One [`CanonicalGraph`] is built per fetch. Edges can only be inserted
//! when both endpoints already exist, so every edge in the snapshot
//! references a node of the snapshot.
//!
//! The snapshot id identifies the graph contents: it changes on every
//! successful insert and a clone receives its own id, so derived views
//! memoized on the id never outlive the contents they were computed from.

use super::edge::Edge;
use super::node::Node;
use super::types::{Category, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

static NEXT_SNAPSHOT: AtomicU64 = AtomicU64::new(1);

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Node and edge counts for one snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_per_category: IndexMap<Category, usize>,
}

/// Canonical graph for one fetch
///
/// - nodes: NodeId -> Node, in arrival order
/// - edges: arrival order
/// - outgoing: NodeId -> edge positions
#[derive(Debug)]
pub struct CanonicalGraph {
    /// Identity of this snapshot, used for memoizing derived views
    snapshot: u64,

    nodes: IndexMap<NodeId, Node>,

    edges: Vec<Edge>,

    outgoing: HashMap<NodeId, Vec<usize>>,
}

fn next_snapshot() -> u64 {
    NEXT_SNAPSHOT.fetch_add(1, Ordering::Relaxed)
}

impl CanonicalGraph {
    /// Create a new empty snapshot
    pub fn new() -> Self {
        CanonicalGraph {
            snapshot: next_snapshot(),
            nodes: IndexMap::new(),
            edges: Vec::new(),
            outgoing: HashMap::new(),
        }
    }

    /// Snapshot identity. Two graphs never share one, and any mutation
    /// assigns a new one.
    pub fn snapshot(&self) -> u64 {
        self.snapshot
    }

    /// Insert a node; ids must be unique within the snapshot
    pub fn insert_node(&mut self, node: Node) -> GraphResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::NodeAlreadyExists(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        self.snapshot = next_snapshot();
        Ok(())
    }

    /// Insert an edge; both endpoints must already be present
    pub fn insert_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if !self.nodes.contains_key(&edge.source) {
            return Err(GraphError::InvalidEdgeSource(edge.source));
        }
        if !self.nodes.contains_key(&edge.target) {
            return Err(GraphError::InvalidEdgeTarget(edge.target));
        }

        let position = self.edges.len();
        self.outgoing.entry(edge.source.clone()).or_default().push(position);
        self.edges.push(edge);
        self.snapshot = next_snapshot();
        Ok(())
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in arrival order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Edges in arrival order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get all outgoing edges from a node
    pub fn get_outgoing_edges(&self, id: &str) -> Vec<&Edge> {
        self.outgoing
            .get(id)
            .map(|positions| positions.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Per-category counts, in legend order
    pub fn statistics(&self) -> GraphStatistics {
        let mut nodes_per_category: IndexMap<Category, usize> =
            Category::ALL.iter().map(|&c| (c, 0)).collect();
        for node in self.nodes.values() {
            *nodes_per_category.entry(node.category).or_insert(0) += 1;
        }
        nodes_per_category.retain(|_, count| *count > 0);

        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            nodes_per_category,
        }
    }
}

impl Clone for CanonicalGraph {
    fn clone(&self) -> Self {
        CanonicalGraph {
            snapshot: next_snapshot(),
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            outgoing: self.outgoing.clone(),
        }
    }
}

impl Default for CanonicalGraph {
    fn default() -> Self {
        Self::new()
    }
}
