//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the song catalog.
#[derive(Error, Debug)]
pub enum CatalogClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned an error response
    #[error("Catalog error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// API key missing, invalid, or lacking access to the table
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid catalog URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse catalog response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Catalog is offline or unreachable
    #[error("Catalog unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<url::ParseError> for CatalogClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<CatalogClientError> for mango_core::MangoError {
    fn from(err: CatalogClientError) -> Self {
        Self::source(err.to_string())
    }
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogClientError>;
