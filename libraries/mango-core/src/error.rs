/// Core error types for Melodic Mango
use thiserror::Error;

/// Result type alias using `MangoError`
pub type Result<T> = std::result::Result<T, MangoError>;

/// Core error type for Melodic Mango
#[derive(Error, Debug)]
pub enum MangoError {
    /// A playlist source could not deliver tracks
    #[error("Playlist source error: {0}")]
    Source(String),

    /// A track record could not be interpreted
    #[error("Invalid track record: {0}")]
    InvalidTrack(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MangoError {
    /// Create a playlist source error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create an invalid track error
    pub fn invalid_track(msg: impl Into<String>) -> Self {
        Self::InvalidTrack(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
