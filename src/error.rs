//! Error types for the data-source layer

use crate::temporal::TemporalError;
use thiserror::Error;

/// Errors raised while fetching, decoding or configuring
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// URL that cannot be parsed or extended with path segments
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Collection name not served by the API
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Invalid time window
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ExplorerError::Status {
            status: 503,
            url: "http://localhost:8000/api/v1/stats/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request to http://localhost:8000/api/v1/stats/ failed with status 503"
        );
    }

    #[test]
    fn test_from_temporal() {
        let err: ExplorerError = TemporalError::InvertedWindow { min: 5, max: 1 }.into();
        assert!(matches!(err, ExplorerError::Temporal(_)));
    }
}
