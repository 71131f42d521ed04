//! Explorer configuration
//!
//! Loaded from TOML; every key is optional and falls back to [`Default`].
//!
//! ```toml
//! api_base_url = "http://localhost:8000/api/v1"
//! geojson_url = "http://localhost:8000/api/geojson"
//! request_timeout_secs = 30
//! cache_capacity = 64
//! default_window = [1000, 1400]
//! ```

use crate::error::ExplorerResult;
use crate::temporal::TimeWindow;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Base URL of the versioned REST API
    pub api_base_url: String,
    /// Map endpoint, outside the versioned prefix
    pub geojson_url: String,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Entries kept by the response cache
    pub cache_capacity: usize,
    /// Initial map window
    pub default_window: TimeWindow,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api/v1".to_string(),
            geojson_url: "http://localhost:8000/api/geojson".to_string(),
            request_timeout_secs: 30,
            cache_capacity: 64,
            default_window: TimeWindow::DEFAULT,
        }
    }
}

impl ExplorerConfig {
    pub fn from_toml_str(text: &str) -> ExplorerResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Point both endpoints at another host, keeping their paths.
    ///
    /// `base` is the server root, e.g. `http://explorer.example.org:8000`.
    pub fn with_server(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.api_base_url = format!("{}/api/v1", base);
        self.geojson_url = format!("{}/api/geojson", base);
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExplorerError;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api/v1");
        assert_eq!(config.default_window, TimeWindow::DEFAULT);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml() {
        let config = ExplorerConfig::from_toml_str(
            "cache_capacity = 8\ndefault_window = [1100, 1200]\n",
        )
        .unwrap();
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.default_window, TimeWindow::new(1100, 1200).unwrap());
        assert_eq!(config.geojson_url, "http://localhost:8000/api/geojson");
    }

    #[test]
    fn test_invalid_window_rejected() {
        let err = ExplorerConfig::from_toml_str("default_window = [1400, 1000]").unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));
    }

    #[test]
    fn test_with_server() {
        let config = ExplorerConfig::default().with_server("https://jp.example.org/");
        assert_eq!(config.api_base_url, "https://jp.example.org/api/v1");
        assert_eq!(config.geojson_url, "https://jp.example.org/api/geojson");
    }
}
