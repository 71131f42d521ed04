//! Normalization of raw backend records into a [`CanonicalGraph`]
//!
//! The builder reads a [`GraphPayload`] by reference and produces owned
//! copies, so a payload that is later handed to a layout engine (which
//! mutates positions and endpoints in place) never aliases the snapshot.

use super::edge::{Edge, Endpoint};
use super::node::Node;
use super::raw::{GraphPayload, RawEdge, RawNode};
use super::store::CanonicalGraph;
use super::types::NodeId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// What the builder had to discard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    pub nodes_accepted: usize,
    pub edges_accepted: usize,
    pub nodes_without_id: usize,
    pub duplicate_nodes: usize,
    pub edges_missing_endpoint: usize,
    pub dangling_edges: usize,
}

impl BuildReport {
    pub fn dropped(&self) -> usize {
        self.nodes_without_id + self.duplicate_nodes + self.edges_missing_endpoint + self.dangling_edges
    }
}

/// Builds canonical graphs from raw records
#[derive(Debug, Clone, Default)]
pub struct GraphModelBuilder {
    graph: CanonicalGraph,
    report: BuildReport,
}

impl GraphModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a complete payload.
    ///
    /// All nodes are inserted before any edge, so edge order in the payload
    /// does not matter.
    pub fn build(payload: &GraphPayload) -> (CanonicalGraph, BuildReport) {
        let mut builder = Self::new();
        for node in &payload.nodes {
            builder.add_node(node);
        }
        for edge in &payload.edges {
            builder.add_edge(edge);
        }
        builder.finish()
    }

    /// Normalize and insert one node record
    pub fn add_node(&mut self, raw: &RawNode) -> &mut Self {
        let Some(id) = raw.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) else {
            debug!("Dropping node record without id");
            self.report.nodes_without_id += 1;
            return self;
        };

        let label = raw
            .label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(id);

        let mut node = Node::new(id, label, raw.category);
        node.source = raw.source.clone();

        match self.graph.insert_node(node) {
            Ok(()) => self.report.nodes_accepted += 1,
            Err(e) => {
                debug!("Dropping node record: {}", e);
                self.report.duplicate_nodes += 1;
            }
        }
        self
    }

    /// Normalize and insert one edge record
    pub fn add_edge(&mut self, raw: &RawEdge) -> &mut Self {
        let (Some(from), Some(to)) = (raw.from.as_ref(), raw.to.as_ref()) else {
            debug!("Dropping edge record with a missing endpoint");
            self.report.edges_missing_endpoint += 1;
            return self;
        };

        let edge = Edge {
            source: normalize_endpoint(from),
            target: normalize_endpoint(to),
            label: raw.label.clone(),
        };

        match self.graph.insert_edge(edge) {
            Ok(()) => self.report.edges_accepted += 1,
            Err(e) => {
                debug!("Dropping edge record: {}", e);
                self.report.dangling_edges += 1;
            }
        }
        self
    }

    /// Finish building and return the snapshot with its report
    pub fn finish(self) -> (CanonicalGraph, BuildReport) {
        let report = self.report;
        if report.dropped() > 0 {
            warn!(
                "Discarded {} raw records ({} without id, {} duplicate nodes, {} edges missing an endpoint, {} dangling edges)",
                report.dropped(),
                report.nodes_without_id,
                report.duplicate_nodes,
                report.edges_missing_endpoint,
                report.dangling_edges
            );
        }
        info!(
            "Built graph snapshot {} with {} nodes and {} edges",
            self.graph.snapshot(),
            self.graph.node_count(),
            self.graph.edge_count()
        );
        (self.graph, report)
    }
}

/// Unwrap an edge endpoint to its node id
///
/// Every consumer of edge endpoints goes through this function.
pub fn normalize_endpoint(endpoint: &Endpoint) -> NodeId {
    NodeId::new(endpoint.id().trim())
}
