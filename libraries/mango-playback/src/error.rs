//! Error types for playback control

use mango_core::TrackId;
use thiserror::Error;

/// Playback errors
///
/// Both failure kinds are terminal for the operation that raised them: the
/// controller logs them and keeps running with its previous state.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The playlist source was unreachable or returned an error
    #[error("Failed to fetch playlist: {0}")]
    FetchFailure(String),

    /// The audio primitive failed to load or play a track
    #[error("Playback failed for track {track_id}: {message}")]
    PlaybackFailure {
        /// Track that was being loaded or played
        track_id: TrackId,
        /// Message reported by the primitive
        message: String,
    },

    /// Volume outside [0, 1] or not a number
    #[error("Invalid volume: {0}")]
    InvalidVolume(f32),
}

impl From<mango_core::MangoError> for PlaybackError {
    fn from(err: mango_core::MangoError) -> Self {
        Self::FetchFailure(err.to_string())
    }
}

/// Errors reported synchronously by an audio primitive
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AudioError {
    /// The primitive refused to start playback
    #[error("Play request rejected: {0}")]
    PlayRejected(String),

    /// The media could not be loaded
    #[error("Media error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
