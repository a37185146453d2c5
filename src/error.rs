//! Error types for the lookups and the configuration layer.

use thiserror::Error;

/// Failure of one of the two remote lookups.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The geocoder returned no match for the query.
    #[error("Location not found: '{0}'")]
    Lookup(String),

    /// The response body did not have the expected shape.
    #[error("Invalid API response: {0}")]
    Schema(String),

    /// The request did not complete within the configured bound.
    #[error("Request timed out: {0}")]
    Timeout(String),
}

/// Failure while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file: {0}")]
    Json(#[from] serde_json::Error),
}
