//! Research Explorer
//!
//! In-memory entity-graph filtering, temporal-overlap and ontology-audit
//! engine behind a prosopographical dataset browser (historical persons,
//! works, places, subjects, languages, scholarly literature).
//!
//! # Pipeline
//!
//! ```text
//! raw records ──GraphModelBuilder──> CanonicalGraph
//!                                       │
//!                          VisibilityFilter (category toggles)
//!                                       │
//!                                  VisibleGraph ──search──> index ──> FocusRequest
//! ```
//!
//! The temporal engine and the ontology auditor work on raw records directly
//! and sit outside the graph pipeline.
//!
//! ## Example Usage
//!
//! ```rust
//! use research_explorer::graph::{Category, GraphModelBuilder, GraphPayload, RawEdge, RawNode};
//! use research_explorer::filter::VisibilityFilter;
//!
//! let payload = GraphPayload::new(
//!     vec![
//!         RawNode::new("a", "Abraham", Category::Person),
//!         RawNode::new("b", "Barcelona", Category::Place),
//!     ],
//!     vec![RawEdge::new("a", "b")],
//! );
//! let (graph, _report) = GraphModelBuilder::build(&payload);
//!
//! let mut filter = VisibilityFilter::new();
//! filter.toggle(Category::Place);
//! let visible = filter.visible(&graph);
//! assert_eq!(visible.node_count(), 1);
//! assert_eq!(visible.edge_count(), 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod map;
pub mod ontology;
pub mod search;
pub mod source;
pub mod table;
pub mod temporal;
pub mod view;

// Re-export main types for convenience
pub use config::ExplorerConfig;
pub use error::{ExplorerError, ExplorerResult};

pub use graph::{
    normalize_endpoint, BuildReport, CanonicalGraph, Category, Edge, Endpoint, GraphError,
    GraphModelBuilder, GraphPayload, GraphResult, Node, NodeId, RawEdge, RawNode,
};

pub use filter::{compute_visible, TypeToggles, VisibilityFilter, VisibleGraph};

pub use search::{search, FocusRequest, LayoutPosition, LayoutPositions};

pub use temporal::{is_in_window, Dated, TemporalEntity, TemporalError, TimeWindow};

pub use ontology::{
    AuditResult, OntologyAudit, OntologyAuditor, Schema, Statement, TermKind, UsageScanner,
    Vocabulary, VocabularyTerm,
};

pub use map::{features_in_window, Feature, FeatureCollection};

pub use source::{CachedSource, Collection, DataSource, MemorySource, RemoteSource};

pub use table::{Column, SortDirection, TableView};

pub use view::{LoadState, MapExplorer, NetworkExplorer, Resolution, ViewHandle, ViewSlot};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
