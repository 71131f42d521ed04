use research_explorer::filter::{compute_visible, TypeToggles, VisibilityFilter};
use research_explorer::graph::{Category, Endpoint, GraphModelBuilder, GraphPayload, RawEdge, RawNode, ResolvedEndpoint};
use research_explorer::search::search;

fn ab_payload() -> GraphPayload {
    GraphPayload::new(
        vec![
            RawNode::new("a", "a", Category::Person),
            RawNode::new("b", "b", Category::Place),
        ],
        vec![RawEdge::new("a", "b")],
    )
}

#[test]
fn test_place_toggle_scenario() {
    let (graph, _) = GraphModelBuilder::build(&ab_payload());
    let mut filter = VisibilityFilter::new();
    let original = filter.visible(&graph).clone();
    assert_eq!(original.node_count(), 2);
    assert_eq!(original.edge_count(), 1);

    filter.toggle(Category::Place);
    let hidden = filter.visible(&graph);
    let ids: Vec<&str> = hidden.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
    assert!(hidden.edges.is_empty());

    filter.toggle(Category::Place);
    assert!(filter.visible(&graph).same_elements(&original));
}

#[test]
fn test_network_response_through_pipeline() {
    let json = r#"{
        "nodes": [
            {"id": "Maimonides", "label": "Moses Maimonides", "group": "HistoricalPerson"},
            {"id": "Guide", "label": "Guide for the Perplexed", "group": "HistoricalWork"},
            {"id": "Fustat", "label": "Fustat", "group": "Place"},
            {"id": "JudeoArabic", "label": "Judeo-Arabic", "group": "HistoricalLanguage"},
            {"id": "Dynasty1", "label": "Ayyubids", "group": "Dynasty"}
        ],
        "edges": [
            {"from": "Guide", "to": "Maimonides"},
            {"from": "Maimonides", "to": "Fustat"},
            {"from": "Guide", "to": "JudeoArabic"},
            {"from": "Maimonides", "to": "Dynasty1"},
            {"from": "Guide", "to": "Missing"}
        ]
    }"#;
    let payload: GraphPayload = serde_json::from_str(json).unwrap();
    let (graph, report) = GraphModelBuilder::build(&payload);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(report.dangling_edges, 1);
    assert_eq!(graph.get_node("Dynasty1").unwrap().category, Category::Unknown);

    let toggles = TypeToggles::only(&[Category::Person, Category::Work]);
    let visible = compute_visible(&graph, &toggles);
    assert_eq!(visible.node_count(), 2);
    assert_eq!(visible.edge_count(), 1);
    assert!(visible.is_closed());

    let index: Vec<&str> = search(&visible.nodes, "").iter().map(|n| n.label.as_str()).collect();
    assert_eq!(index, vec!["Guide for the Perplexed", "Moses Maimonides"]);
}

#[test]
fn test_layout_resolved_payload_rebuilds_identically() {
    let payload = ab_payload();
    let (first, _) = GraphModelBuilder::build(&payload);

    // a layout pass replaced the endpoint ids with node objects
    let mut laid_out = payload.clone();
    for edge in &mut laid_out.edges {
        let source = edge.from.as_ref().unwrap().id().to_string();
        let target = edge.to.as_ref().unwrap().id().to_string();
        edge.from = Some(Endpoint::Resolved(ResolvedEndpoint { id: source, x: Some(1.5), y: Some(-2.0) }));
        edge.to = Some(Endpoint::Resolved(ResolvedEndpoint { id: target, x: None, y: None }));
    }
    let (second, _) = GraphModelBuilder::build(&laid_out);

    assert_eq!(first.edges(), second.edges());
    let toggles = TypeToggles::new();
    assert!(compute_visible(&first, &toggles).same_elements(&compute_visible(&second, &toggles)));
}

#[test]
fn test_search_ordering() {
    let payload = GraphPayload::new(
        vec![
            RawNode::new("1", "Baruch", Category::Person),
            RawNode::new("2", "Abraham", Category::Person),
            RawNode::new("3", "Chaim", Category::Person),
        ],
        vec![],
    );
    let (graph, _) = GraphModelBuilder::build(&payload);

    let all: Vec<&str> = search(graph.nodes(), "").iter().map(|n| n.label.as_str()).collect();
    assert_eq!(all, vec!["Abraham", "Baruch", "Chaim"]);

    let hits: Vec<&str> = search(graph.nodes(), "ba").iter().map(|n| n.label.as_str()).collect();
    assert_eq!(hits, vec!["Baruch"]);
}

#[test]
fn test_malformed_records_are_dropped_not_fatal() {
    let json = r#"{
        "nodes": [
            {"id": "p1", "label": "Hasdai Crescas", "group": "HistoricalPerson"},
            {"id": "x1", "label": "Odd group", "group": 3},
            {"id": 7, "label": "Numeric id", "group": "Place"},
            {"id": ["bad"], "label": "No usable id", "group": "Work"},
            {"id": "s1", "label": "Free will", "group": "Subject", "category": "Subject"}
        ],
        "edges": [
            {"from": "p1", "to": "7"},
            {"from": "p1", "to": "s1", "source": {"id": "p1", "x": 0.5}, "target": {"id": "s1"}},
            {"from": true, "to": "x1"},
            {"from": "p1", "to": "nowhere"}
        ]
    }"#;
    let payload: GraphPayload = serde_json::from_str(json).unwrap();
    let (graph, report) = GraphModelBuilder::build(&payload);

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.get_node("x1").map(|n| n.category), Some(Category::Unknown));
    assert_eq!(graph.get_node("7").map(|n| n.category), Some(Category::Place));
    assert_eq!(report.nodes_without_id, 1);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(report.edges_missing_endpoint, 1);
    assert_eq!(report.dangling_edges, 1);

    let mut toggles = TypeToggles::new();
    toggles.set(Category::Unknown, false);
    let visible = compute_visible(&graph, &toggles);
    assert_eq!(visible.node_count(), 3);
    assert!(visible.is_closed());
}
