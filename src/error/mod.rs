//! Error handling for the listing normalizer.

use thiserror::Error;

/// Specialized error type for normalization runs
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// Error opening or reading a feed file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing a provider payload or writing output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Mandatory identifying fields (uid/ref/url) could not be derived
    #[error("missing identity: {0}")]
    MissingIdentity(String),
    /// A source record's nested structure did not match the provider layout
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    /// No adapter is registered under the requested source name
    #[error("unknown source: {0}")]
    UnknownSource(String),
}

/// Result type for normalizer operations
pub type Result<T> = std::result::Result<T, NormalizerError>;
