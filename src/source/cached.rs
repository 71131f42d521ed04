//! CachedSource: LRU response cache in front of another source
//!
//! Entries are keyed by request path and partition. Errors are never
//! cached, so a failed request is retried on the next call.

use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;

use super::models::{Collection, EntityDetail, EntityRecord, GlobalStats, SourceInfo};
use super::DataSource;
use crate::error::ExplorerResult;
use crate::graph::GraphPayload;
use crate::map::FeatureCollection;
use crate::ontology::OntologyAudit;

/// Cache key: endpoint path plus optional partition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey {
    pub path: String,
    pub source: Option<String>,
}

impl RequestKey {
    fn new(path: impl Into<String>, source: Option<&str>) -> Self {
        RequestKey {
            path: path.into(),
            source: source.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone)]
enum Cached {
    Graph(GraphPayload),
    Audit(OntologyAudit),
    Features(FeatureCollection),
    Records(Vec<EntityRecord>),
    Detail(Option<EntityDetail>),
    Sources(Vec<SourceInfo>),
    Stats(GlobalStats),
}

/// Caching wrapper; a capacity of zero disables caching
pub struct CachedSource<S> {
    inner: S,
    cache: Option<Mutex<LruCache<RequestKey, Cached>>>,
}

impl<S: DataSource> CachedSource<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        Self {
            inner,
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of cached responses
    pub async fn len(&self) -> usize {
        match &self.cache {
            Some(cache) => cache.lock().await.len(),
            None => 0,
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every cached response
    pub async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().await.clear();
        }
    }

    async fn lookup(&self, key: &RequestKey) -> Option<Cached> {
        let cache = self.cache.as_ref()?;
        let hit = cache.lock().await.get(key).cloned();
        if hit.is_some() {
            debug!("Cache hit for {:?}", key);
        }
        hit
    }

    async fn store(&self, key: RequestKey, value: Cached) {
        if let Some(cache) = &self.cache {
            cache.lock().await.put(key, value);
        }
    }
}

/// Serve from cache when the key holds the expected variant, otherwise
/// fetch, store and return.
macro_rules! cached {
    ($self:ident, $key:expr, $variant:ident, $fetch:expr) => {{
        let key = $key;
        if let Some(Cached::$variant(value)) = $self.lookup(&key).await {
            return Ok(value);
        }
        let value = $fetch.await?;
        $self.store(key, Cached::$variant(value.clone())).await;
        Ok(value)
    }};
}

#[async_trait]
impl<S: DataSource> DataSource for CachedSource<S> {
    async fn network(&self, source: Option<&str>) -> ExplorerResult<GraphPayload> {
        cached!(self, RequestKey::new("/network/", source), Graph, self.inner.network(source))
    }

    async fn ontology_graph(&self) -> ExplorerResult<GraphPayload> {
        cached!(self, RequestKey::new("/ontology/", None), Graph, self.inner.ontology_graph())
    }

    async fn ontology_audit(&self) -> ExplorerResult<OntologyAudit> {
        cached!(self, RequestKey::new("/ontology/audit", None), Audit, self.inner.ontology_audit())
    }

    async fn geojson(&self, source: Option<&str>) -> ExplorerResult<FeatureCollection> {
        cached!(self, RequestKey::new("/geojson", source), Features, self.inner.geojson(source))
    }

    async fn list(&self, collection: Collection, source: Option<&str>) -> ExplorerResult<Vec<EntityRecord>> {
        cached!(
            self,
            RequestKey::new(format!("/{}/", collection.path()), source),
            Records,
            self.inner.list(collection, source)
        )
    }

    async fn detail(&self, collection: Collection, id: &str) -> ExplorerResult<Option<EntityDetail>> {
        cached!(
            self,
            RequestKey::new(format!("/{}/{}", collection.path(), id), None),
            Detail,
            self.inner.detail(collection, id)
        )
    }

    async fn sources(&self) -> ExplorerResult<Vec<SourceInfo>> {
        cached!(self, RequestKey::new("/sources/", None), Sources, self.inner.sources())
    }

    async fn stats(&self, source: Option<&str>) -> ExplorerResult<GlobalStats> {
        cached!(self, RequestKey::new("/stats", source), Stats, self.inner.stats(source))
    }
}
