//! Label search over a node list
//!
//! Feeds the list-style index next to the graph. Matching is a
//! case-insensitive substring test on the label; results are ordered by
//! [`compare_labels`]. An empty query matches every node.

pub mod collation;
pub mod focus;

pub use collation::{collation_key, compare_labels};
pub use focus::{focus_request, FocusRequest, LayoutPosition, LayoutPositions};

use crate::graph::Node;

/// Filter `nodes` by `query` and order the hits by label
pub fn search<'a, I>(nodes: I, query: &str) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    let needle = query.to_lowercase();

    let mut hits: Vec<(String, &'a Node)> = nodes
        .into_iter()
        .filter(|node| needle.is_empty() || node.label.to_lowercase().contains(&needle))
        .map(|node| (collation_key(&node.label), node))
        .collect();

    hits.sort_by(|(key_a, a), (key_b, b)| key_a.cmp(key_b).then_with(|| a.label.cmp(&b.label)));
    hits.into_iter().map(|(_, node)| node).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Category;

    fn labels(nodes: &[&Node]) -> Vec<String> {
        nodes.iter().map(|n| n.label.clone()).collect()
    }

    fn nodes() -> Vec<Node> {
        vec![
            Node::new("1", "Baruch", Category::Person),
            Node::new("2", "Abraham", Category::Person),
            Node::new("3", "Chaim", Category::Person),
        ]
    }

    #[test]
    fn test_empty_query_sorts_everything() {
        let nodes = nodes();
        assert_eq!(labels(&search(&nodes, "")), vec!["Abraham", "Baruch", "Chaim"]);
    }

    #[test]
    fn test_substring_match_case_insensitive() {
        let nodes = nodes();
        assert_eq!(labels(&search(&nodes, "ba")), vec!["Baruch"]);
        assert_eq!(labels(&search(&nodes, "AH")), vec!["Abraham"]);
        assert!(search(&nodes, "zz").is_empty());
    }

    #[test]
    fn test_equal_labels_keep_input_order() {
        let nodes = vec![
            Node::new("x", "Toledo", Category::Place),
            Node::new("y", "Toledo", Category::Place),
        ];
        let hits = search(&nodes, "tol");
        assert_eq!(hits[0].id.as_str(), "x");
        assert_eq!(hits[1].id.as_str(), "y");
    }
}
