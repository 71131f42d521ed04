//! Entity graph data model
//!
//! This module implements the canonical graph built from one fetch:
//! - Nodes with an id, a label and a closed category
//! - Directed edges whose endpoints always exist in the snapshot
//! - Permissive raw records and the builder that normalizes them

pub mod builder;
pub mod edge;
pub mod node;
pub mod raw;
pub mod store;
pub mod types;

// Re-export main types
pub use builder::{normalize_endpoint, BuildReport, GraphModelBuilder};
pub use edge::{Edge, Endpoint, ResolvedEndpoint};
pub use node::Node;
pub use raw::{GraphPayload, RawEdge, RawNode};
pub use store::{CanonicalGraph, GraphError, GraphResult, GraphStatistics};
pub use types::{Category, NodeId};
