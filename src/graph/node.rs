//! Node implementation for the entity graph

use super::types::{Category, NodeId};
use serde::{Deserialize, Serialize};

/// A node in the canonical graph
///
/// Nodes carry:
/// - A unique ID (unique within one snapshot)
/// - A display label
/// - The entity category used for filtering and coloring
/// - The dataset partition it came from, when the backend reports one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Human readable label
    pub label: String,

    /// Entity category
    pub category: Category,

    /// Source partition identifier (e.g. "Source_Wikidata")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Node {
    /// Create a new node
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, category: Category) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            category,
            source: None,
        }
    }

    /// Attach the source partition
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Display color for this node
    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    /// Detail page route, if the category has one
    pub fn route(&self) -> Option<String> {
        self.category.route(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = Node::new("p1", "Abraham ibn Ezra", Category::Person);
        assert_eq!(node.id, NodeId::new("p1"));
        assert_eq!(node.label, "Abraham ibn Ezra");
        assert_eq!(node.category, Category::Person);
        assert!(node.source.is_none());
    }

    #[test]
    fn test_node_presentation() {
        let node = Node::new("w7", "Guide for the Perplexed", Category::Work)
            .with_source("Source_Wikidata");
        assert_eq!(node.color(), "#3498db");
        assert_eq!(node.route().as_deref(), Some("/works/w7"));
        assert_eq!(node.source.as_deref(), Some("Source_Wikidata"));
    }

    #[test]
    fn test_node_serialization_skips_missing_source() {
        let node = Node::new("pl1", "Cordoba", Category::Place);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["category"], "Place");
        assert!(json.get("source").is_none());
    }
}
