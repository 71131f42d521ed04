//! MemorySource: in-process fixture data
//!
//! Serves everything from memory with the same semantics as the REST API:
//! source filtering on records that carry a `source` field, `None` for
//! unknown detail ids, and an ontology audit computed from a schema plus
//! dataset statements.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::models::{Collection, EntityDetail, EntityRecord, GlobalStats, SourceInfo};
use super::DataSource;
use crate::error::ExplorerResult;
use crate::graph::GraphPayload;
use crate::map::FeatureCollection;
use crate::ontology::{audit_dataset, OntologyAudit, Schema, Statement};

#[derive(Debug, Default)]
pub struct MemorySource {
    network: GraphPayload,
    schema: Schema,
    statements: Vec<Statement>,
    features: FeatureCollection,
    lists: HashMap<Collection, Vec<EntityRecord>>,
    details: HashMap<(Collection, String), EntityDetail>,
    sources: Vec<SourceInfo>,
    requests: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network(mut self, payload: GraphPayload) -> Self {
        self.network = payload;
        self
    }

    /// Ontology schema and the dataset statements it is audited against
    pub fn with_ontology(mut self, schema: Schema, statements: Vec<Statement>) -> Self {
        self.schema = schema;
        self.statements = statements;
        self
    }

    pub fn with_features(mut self, features: FeatureCollection) -> Self {
        self.features = features;
        self
    }

    pub fn with_list(mut self, collection: Collection, records: Vec<EntityRecord>) -> Self {
        self.lists.insert(collection, records);
        self
    }

    pub fn with_detail(mut self, collection: Collection, id: impl Into<String>, detail: EntityDetail) -> Self {
        self.details.insert((collection, id.into()), detail);
        self
    }

    pub fn with_source(mut self, info: SourceInfo) -> Self {
        self.sources.push(info);
        self
    }

    /// Number of requests served so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    fn served(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn records(&self, collection: Collection, source: Option<&str>) -> Vec<EntityRecord> {
        self.lists
            .get(&collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| matches_source(r.source(), source))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Records without a `source` field belong to every partition
fn matches_source(record: Option<&str>, wanted: Option<&str>) -> bool {
    match (record, wanted) {
        (_, None) => true,
        (None, Some(_)) => true,
        (Some(have), Some(want)) => have == want,
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn network(&self, source: Option<&str>) -> ExplorerResult<GraphPayload> {
        self.served();
        let nodes = self
            .network
            .nodes
            .iter()
            .filter(|n| matches_source(n.source.as_deref(), source))
            .cloned()
            .collect();
        Ok(GraphPayload::new(nodes, self.network.edges.clone()))
    }

    async fn ontology_graph(&self) -> ExplorerResult<GraphPayload> {
        self.served();
        Ok(self.schema.ontology_graph())
    }

    async fn ontology_audit(&self) -> ExplorerResult<OntologyAudit> {
        self.served();
        Ok(audit_dataset(&self.schema, &self.statements))
    }

    async fn geojson(&self, _source: Option<&str>) -> ExplorerResult<FeatureCollection> {
        self.served();
        Ok(self.features.clone())
    }

    async fn list(&self, collection: Collection, source: Option<&str>) -> ExplorerResult<Vec<EntityRecord>> {
        self.served();
        Ok(self.records(collection, source))
    }

    async fn detail(&self, collection: Collection, id: &str) -> ExplorerResult<Option<EntityDetail>> {
        self.served();
        Ok(self.details.get(&(collection, id.to_string())).cloned())
    }

    async fn sources(&self) -> ExplorerResult<Vec<SourceInfo>> {
        self.served();
        Ok(self.sources.clone())
    }

    async fn stats(&self, source: Option<&str>) -> ExplorerResult<GlobalStats> {
        self.served();
        let mut stats: GlobalStats = Collection::ALL
            .into_iter()
            .map(|c| (c.path().to_string(), self.records(c, source).len() as u64))
            .collect();
        stats.insert("sources".to_string(), self.sources.len() as u64);
        Ok(stats)
    }
}
