//! Network view: one graph snapshot with its toggles and search query

use crate::filter::{TypeToggles, VisibilityFilter, VisibleGraph};
use crate::graph::{BuildReport, CanonicalGraph, Category, GraphModelBuilder, GraphPayload, Node};
use crate::search::{focus_request, search, FocusRequest, LayoutPositions};

/// State behind the network and ontology graph views.
///
/// The snapshot is replaced wholesale on every fetch; toggles and the
/// search query are view state and are carried into the next snapshot
/// with [`NetworkExplorer::keep_view_state`].
#[derive(Debug, Clone)]
pub struct NetworkExplorer {
    graph: CanonicalGraph,
    report: BuildReport,
    filter: VisibilityFilter,
    query: String,
}

impl NetworkExplorer {
    pub fn from_payload(payload: &GraphPayload) -> Self {
        let (graph, report) = GraphModelBuilder::build(payload);
        NetworkExplorer {
            graph,
            report,
            filter: VisibilityFilter::new(),
            query: String::new(),
        }
    }

    /// Take over the toggles and query of `previous`
    pub fn keep_view_state(&mut self, previous: &NetworkExplorer) {
        self.filter = VisibilityFilter::with_toggles(*previous.toggles());
        self.query = previous.query.clone();
    }

    pub fn graph(&self) -> &CanonicalGraph {
        &self.graph
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn toggles(&self) -> &TypeToggles {
        self.filter.toggles()
    }

    /// Flip one category; returns its new visibility
    pub fn toggle(&mut self, category: Category) -> bool {
        self.filter.toggle(category)
    }

    pub fn set_visible(&mut self, category: Category, visible: bool) {
        self.filter.set(category, visible);
    }

    pub fn visible(&mut self) -> &VisibleGraph {
        self.filter.visible(&self.graph)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Visible nodes matching the query, in index order
    pub fn index(&mut self) -> Vec<&Node> {
        let visible = self.filter.visible(&self.graph);
        search(&visible.nodes, &self.query)
    }

    /// Camera request for selecting `id` in the index
    pub fn focus(&self, id: &str, positions: &LayoutPositions) -> Option<FocusRequest> {
        focus_request(self.graph.get_node(id)?, positions)
    }
}
