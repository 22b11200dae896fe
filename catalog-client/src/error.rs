//! Error types for the catalog client

use catalog_bridge::TransportError;
use thiserror::Error;

/// Catalog client errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Upstream answered a required fetch with a non-success status
    #[error("catalog service error (status {status}): {url}")]
    Api { status: u16, url: String },

    /// Response body could not be decoded
    #[error("failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },

    /// Connection-level failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
