//! RemoteSource: the explorer REST API over HTTP

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{Collection, EntityDetail, EntityRecord, GlobalStats, SourceInfo};
use super::DataSource;
use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, ExplorerResult};
use crate::graph::GraphPayload;
use crate::map::FeatureCollection;
use crate::ontology::OntologyAudit;

/// Network source talking to a running explorer API.
///
/// Versioned endpoints hang off `api_base_url`; the map endpoint has its own
/// URL. Failures are returned as-is, no retry.
pub struct RemoteSource {
    api_base_url: String,
    geojson_url: String,
    http_client: Client,
}

impl RemoteSource {
    /// Create a source with default client settings.
    ///
    /// # Example
    /// ```no_run
    /// # use research_explorer::source::RemoteSource;
    /// let source = RemoteSource::new("http://localhost:8000/api/v1", "http://localhost:8000/api/geojson");
    /// ```
    pub fn new(api_base_url: &str, geojson_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            geojson_url: geojson_url.to_string(),
            http_client: Client::new(),
        }
    }

    /// Create a source from configuration, honoring the request timeout
    pub fn from_config(config: &ExplorerConfig) -> ExplorerResult<Self> {
        let http_client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            geojson_url: config.geojson_url.clone(),
            http_client,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// URL of an API endpoint.
    ///
    /// Segments are percent-encoded; an empty last segment produces the
    /// trailing slash the collection endpoints expect.
    fn endpoint(&self, segments: &[&str], source: Option<&str>) -> ExplorerResult<Url> {
        let mut url = Url::parse(&self.api_base_url)
            .map_err(|e| ExplorerError::InvalidUrl(format!("{}: {}", self.api_base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ExplorerError::InvalidUrl(self.api_base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        with_source(url, source)
    }

    /// GET `url` and decode the body; 404 yields `None`
    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> ExplorerResult<Option<T>> {
        debug!("GET {}", url);
        let response = self.http_client.get(url.clone()).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(Some(response.json().await?))
        } else if status == StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            warn!("GET {} returned {}", url, status);
            Err(ExplorerError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }

    /// GET where a 404 is an error like any other status
    async fn fetch_required<T: DeserializeOwned>(&self, url: Url) -> ExplorerResult<T> {
        let shown = url.to_string();
        self.fetch(url).await?.ok_or(ExplorerError::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            url: shown,
        })
    }
}

fn with_source(mut url: Url, source: Option<&str>) -> ExplorerResult<Url> {
    if let Some(source) = source.filter(|s| !s.is_empty()) {
        url.query_pairs_mut().append_pair("source", source);
    }
    Ok(url)
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn network(&self, source: Option<&str>) -> ExplorerResult<GraphPayload> {
        self.fetch_required(self.endpoint(&["network", ""], source)?).await
    }

    async fn ontology_graph(&self) -> ExplorerResult<GraphPayload> {
        self.fetch_required(self.endpoint(&["ontology", ""], None)?).await
    }

    async fn ontology_audit(&self) -> ExplorerResult<OntologyAudit> {
        self.fetch_required(self.endpoint(&["ontology", "audit"], None)?).await
    }

    async fn geojson(&self, source: Option<&str>) -> ExplorerResult<FeatureCollection> {
        let url = Url::parse(&self.geojson_url)
            .map_err(|e| ExplorerError::InvalidUrl(format!("{}: {}", self.geojson_url, e)))?;
        self.fetch_required(with_source(url, source)?).await
    }

    async fn list(&self, collection: Collection, source: Option<&str>) -> ExplorerResult<Vec<EntityRecord>> {
        self.fetch_required(self.endpoint(&[collection.path(), ""], source)?).await
    }

    async fn detail(&self, collection: Collection, id: &str) -> ExplorerResult<Option<EntityDetail>> {
        self.fetch(self.endpoint(&[collection.path(), id], None)?).await
    }

    async fn sources(&self) -> ExplorerResult<Vec<SourceInfo>> {
        self.fetch_required(self.endpoint(&["sources", ""], None)?).await
    }

    async fn stats(&self, source: Option<&str>) -> ExplorerResult<GlobalStats> {
        self.fetch_required(self.endpoint(&["stats"], source)?).await
    }
}
