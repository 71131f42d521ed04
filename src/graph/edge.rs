//! Edge implementation and endpoint normalization
//!
//! A rendering surface that runs a layout pass over an edge list may
//! replace each endpoint id with the node object it resolves to. The
//! [`Endpoint`] type accepts both shapes and [`Endpoint::id`] is the single
//! place where the object form is unwrapped back into an id.

use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A directed edge in the canonical graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (edge goes FROM this node)
    #[serde(rename = "from")]
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    #[serde(rename = "to")]
    pub target: NodeId,

    /// Relationship label, when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }
}

/// A node object as it appears after a layout pass has resolved an endpoint.
///
/// Only `id` matters to the engine; layout coordinates are tolerated and
/// carried along for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEndpoint {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Edge endpoint as received on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Plain node id
    Id(String),
    /// Node object substituted by a layout pass
    Resolved(ResolvedEndpoint),
}

impl Endpoint {
    /// Canonical node id for this endpoint
    pub fn id(&self) -> &str {
        match self {
            Endpoint::Id(id) => id,
            Endpoint::Resolved(node) => &node.id,
        }
    }
}

impl From<&str> for Endpoint {
    fn from(id: &str) -> Self {
        Endpoint::Id(id.to_string())
    }
}

impl From<String> for Endpoint {
    fn from(id: String) -> Self {
        Endpoint::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new("p1", "pl1");

        assert_eq!(edge.source, NodeId::new("p1"));
        assert_eq!(edge.target, NodeId::new("pl1"));
        assert!(edge.label.is_none());
    }

    #[test]
    fn test_edge_direction() {
        let edge = Edge {
            label: Some("writtenBy".to_string()),
            ..Edge::new("w1", "p1")
        };

        assert_eq!(edge.source, NodeId::new("w1"));
        assert_eq!(edge.target, NodeId::new("p1"));
        assert_eq!(edge.label.as_deref(), Some("writtenBy"));
    }

    #[test]
    fn test_edge_wire_names() {
        let edge = Edge::new("a", "b");
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json, serde_json::json!({"from": "a", "to": "b"}));
    }

    #[test]
    fn test_endpoint_plain_id() {
        let endpoint: Endpoint = serde_json::from_str("\"p1\"").unwrap();
        assert_eq!(endpoint.id(), "p1");
    }

    #[test]
    fn test_endpoint_resolved_object() {
        let endpoint: Endpoint =
            serde_json::from_str(r#"{"id": "p1", "label": "Saadia", "x": 12.5, "y": -3.0, "vx": 0.1}"#)
                .unwrap();
        assert_eq!(endpoint.id(), "p1");
        match endpoint {
            Endpoint::Resolved(node) => assert_eq!(node.x, Some(12.5)),
            Endpoint::Id(_) => panic!("expected resolved endpoint"),
        }
    }
}
