//! Core types for playback control

use crate::volume::DEFAULT_VOLUME;
use serde::{Deserialize, Serialize};

/// Transport phase of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// No playlist (or an empty one)
    Empty,

    /// Playlist loaded, nothing handed to the audio primitive yet
    Uninitialized,

    /// A track is loaded and paused
    LoadedPaused,

    /// A track is loaded and playing, or about to start once ready
    LoadedPlaying,
}

impl PlaybackPhase {
    pub fn is_loaded(self) -> bool {
        matches!(self, PlaybackPhase::LoadedPaused | PlaybackPhase::LoadedPlaying)
    }
}

/// Observable playback state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Index into the playlist; always in range while the playlist is non-empty
    pub current_index: usize,

    /// Whether the primitive is actually playing
    pub is_playing: bool,

    /// Set on the first user-initiated playback request for this playlist
    pub is_initialized: bool,

    /// Output volume in [0, 1]
    pub volume: f32,

    /// Position reported by the primitive for the loaded track
    pub elapsed_seconds: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            is_initialized: false,
            volume: DEFAULT_VOLUME,
            elapsed_seconds: 0.0,
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0-1, default: 0.25)
    pub initial_volume: f32,

    /// Advance to the next track after a playback failure (default: false)
    pub skip_on_error: bool,

    /// Start the first track muted and unmute once it plays, to satisfy
    /// browser autoplay policies (default: true)
    pub prime_muted: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME,
            skip_on_error: false,
            prime_muted: true,
        }
    }
}
