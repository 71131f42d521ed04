use research_explorer::graph::GraphModelBuilder;
use research_explorer::ontology::namespace::{OWL_CLASS, OWL_OBJECT_PROPERTY, RDFS_DOMAIN, RDFS_LABEL, RDFS_RANGE, RDF_TYPE};
use research_explorer::ontology::{audit_dataset, OntologyAudit, Schema, Statement, DATASET_NAMESPACE};
use research_explorer::source::{DataSource, MemorySource};

fn jp(local: &str) -> String {
    format!("{}{}", DATASET_NAMESPACE, local)
}

fn schema_statements() -> Vec<Statement> {
    vec![
        Statement::new(jp("HistoricalPerson"), RDF_TYPE, OWL_CLASS),
        Statement::new(jp("HistoricalPerson"), RDFS_LABEL, "Historical Person"),
        Statement::new(jp("Place"), RDF_TYPE, OWL_CLASS),
        Statement::new(jp("Subject"), RDF_TYPE, OWL_CLASS),
        Statement::new(jp("livedIn"), RDF_TYPE, OWL_OBJECT_PROPERTY),
        Statement::new(jp("livedIn"), RDFS_DOMAIN, jp("HistoricalPerson")),
        Statement::new(jp("livedIn"), RDFS_RANGE, jp("Place")),
        Statement::new(jp("hasSubject"), RDF_TYPE, OWL_OBJECT_PROPERTY),
    ]
}

fn data_statements() -> Vec<Statement> {
    vec![
        Statement::new("http://data/Gersonides", RDF_TYPE, jp("HistoricalPerson")),
        Statement::new("http://data/Gersonides", jp("livedIn"), "http://data/Bagnols"),
        Statement::new("http://data/Bagnols", RDF_TYPE, jp("Place")),
        Statement::new("http://data/Milhamot", RDF_TYPE, jp("Manuscript")),
        Statement::new("http://data/Milhamot", jp("writtenBy"), "http://data/Gersonides"),
    ]
}

#[test]
fn test_audit_from_statements() {
    let schema = Schema::from_statements(DATASET_NAMESPACE, &schema_statements());
    let audit = audit_dataset(&schema, &data_statements());

    assert_eq!(audit.classes.defined_count, 3);
    assert_eq!(audit.classes.actual_count, 2);
    assert_eq!(audit.classes.unused.iter().cloned().collect::<Vec<_>>(), vec![jp("Subject")]);
    assert_eq!(audit.classes.undefined.iter().cloned().collect::<Vec<_>>(), vec![jp("Manuscript")]);

    assert_eq!(audit.properties.defined_count, 2);
    assert_eq!(audit.properties.actual_count, 1);
    assert!(audit.properties.unused.contains(&jp("hasSubject")));
    assert!(audit.properties.undefined.contains(&jp("writtenBy")));
    assert!(!audit.is_clean());
}

#[test]
fn test_audit_json_shape() {
    let schema = Schema::from_statements(DATASET_NAMESPACE, &schema_statements());
    let audit = audit_dataset(&schema, &data_statements());
    let json = serde_json::to_value(&audit).unwrap();

    assert_eq!(json["classes"]["defined_count"], 3);
    assert_eq!(json["properties"]["undefined"][0], jp("writtenBy"));

    let back: OntologyAudit = serde_json::from_value(json).unwrap();
    assert_eq!(back, audit);
}

#[tokio::test]
async fn test_memory_source_serves_ontology() {
    let schema = Schema::from_statements(DATASET_NAMESPACE, &schema_statements());
    let source = MemorySource::new().with_ontology(schema, data_statements());

    let payload = source.ontology_graph().await.unwrap();
    let (graph, report) = GraphModelBuilder::build(&payload);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(report.dropped(), 0);
    assert_eq!(graph.get_node(&jp("HistoricalPerson")).unwrap().label, "Historical Person");
    assert_eq!(graph.get_node(&jp("Subject")).unwrap().label, "Subject");

    let audit = source.ontology_audit().await.unwrap();
    assert_eq!(audit.classes.actual_count, 2);
}
