/// Track domain type
use crate::types::TrackId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable song record
///
/// Tracks are immutable once fetched from a playlist source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Genre
    pub genre: String,

    /// Track duration in seconds, as reported by the catalog
    pub duration_seconds: f64,

    /// Release date, when the catalog row carries a parseable one
    pub release_date: Option<NaiveDate>,

    /// Media URL handed to the audio primitive
    pub file_url: String,

    /// Cover art URL
    pub picture_url: String,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(id: TrackId, title: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            genre: String::new(),
            duration_seconds: 0.0,
            release_date: None,
            file_url: file_url.into(),
            picture_url: String::new(),
        }
    }

    /// Set the artist
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Set the album
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the duration in seconds
    #[must_use]
    pub fn with_duration_seconds(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Get the track duration as a `Duration`
    ///
    /// Negative or non-finite catalog values yield `Duration::ZERO`.
    pub fn duration(&self) -> Duration {
        if self.duration_seconds.is_finite() && self.duration_seconds > 0.0 {
            Duration::from_secs_f64(self.duration_seconds)
        } else {
            Duration::ZERO
        }
    }

    /// Percentage of the track covered by `elapsed_seconds`, clamped to [0, 100]
    ///
    /// The audio primitive may report positions at or past the end before the
    /// finished notification fires, hence the clamp.
    pub fn progress_percent(&self, elapsed_seconds: f64) -> f64 {
        if !(self.duration_seconds.is_finite() && self.duration_seconds > 0.0) {
            return 0.0;
        }
        if !elapsed_seconds.is_finite() {
            return 0.0;
        }
        (elapsed_seconds / self.duration_seconds * 100.0).clamp(0.0, 100.0)
    }
}
