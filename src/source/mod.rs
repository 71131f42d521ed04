//! Data sources: where raw graph, map and listing records come from
//!
//! Implemented by:
//! - `RemoteSource`: the REST API over HTTP
//! - `MemorySource`: in-process fixtures, for tests and embedding
//! - `CachedSource`: an LRU response cache around any other source

pub mod cached;
pub mod memory;
pub mod models;
pub mod remote;

pub use cached::CachedSource;
pub use memory::MemorySource;
pub use models::{Collection, EntityDetail, EntityRecord, GlobalStats, SourceInfo};
pub use remote::RemoteSource;

use crate::error::ExplorerResult;
use crate::graph::GraphPayload;
use crate::map::FeatureCollection;
use crate::ontology::OntologyAudit;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the explorer's data.
///
/// `source` narrows a request to one dataset partition; `None` means all.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Entity network
    async fn network(&self, source: Option<&str>) -> ExplorerResult<GraphPayload>;

    /// Class/property graph of the ontology
    async fn ontology_graph(&self) -> ExplorerResult<GraphPayload>;

    /// Declared versus observed vocabulary
    async fn ontology_audit(&self) -> ExplorerResult<OntologyAudit>;

    /// Person-at-place map features
    async fn geojson(&self, source: Option<&str>) -> ExplorerResult<FeatureCollection>;

    /// Summary rows of one collection
    async fn list(&self, collection: Collection, source: Option<&str>) -> ExplorerResult<Vec<EntityRecord>>;

    /// One entity; `Ok(None)` when the id is unknown
    async fn detail(&self, collection: Collection, id: &str) -> ExplorerResult<Option<EntityDetail>>;

    /// Known dataset partitions
    async fn sources(&self) -> ExplorerResult<Vec<SourceInfo>>;

    /// Global counters
    async fn stats(&self, source: Option<&str>) -> ExplorerResult<GlobalStats>;
}

#[async_trait]
impl<S: DataSource + ?Sized> DataSource for Arc<S> {
    async fn network(&self, source: Option<&str>) -> ExplorerResult<GraphPayload> {
        (**self).network(source).await
    }

    async fn ontology_graph(&self) -> ExplorerResult<GraphPayload> {
        (**self).ontology_graph().await
    }

    async fn ontology_audit(&self) -> ExplorerResult<OntologyAudit> {
        (**self).ontology_audit().await
    }

    async fn geojson(&self, source: Option<&str>) -> ExplorerResult<FeatureCollection> {
        (**self).geojson(source).await
    }

    async fn list(&self, collection: Collection, source: Option<&str>) -> ExplorerResult<Vec<EntityRecord>> {
        (**self).list(collection, source).await
    }

    async fn detail(&self, collection: Collection, id: &str) -> ExplorerResult<Option<EntityDetail>> {
        (**self).detail(collection, id).await
    }

    async fn sources(&self) -> ExplorerResult<Vec<SourceInfo>> {
        (**self).sources().await
    }

    async fn stats(&self, source: Option<&str>) -> ExplorerResult<GlobalStats> {
        (**self).stats(source).await
    }
}
