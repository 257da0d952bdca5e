//! Playback Events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the controller at key points:
//! - Phase changes (play/pause/initialise)
//! - Track changes (manual skip, auto-advance, first load)
//! - Position updates (on every time-advanced notification)
//! - Volume and playlist changes, failures

use crate::types::PlaybackPhase;
use mango_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport phase changed
    StateChanged {
        /// The new phase
        phase: PlaybackPhase,
    },

    /// A different track was loaded into the primitive
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// Its index in the playlist
        index: usize,
        /// ID of the previously loaded track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// Position update
    PositionUpdate {
        /// Current playback position in seconds
        elapsed_seconds: f64,
        /// Total track duration in seconds
        duration_seconds: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-1)
        volume: f32,
    },

    /// Playlist replaced
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Error occurred while fetching or playing
    Error {
        /// Error message
        message: String,
    },
}

impl PlaybackEvent {
    /// Whether a view should redraw the whole card for this event
    pub fn affects_track_display(&self) -> bool {
        matches!(
            self,
            PlaybackEvent::TrackChanged { .. } | PlaybackEvent::PlaylistChanged { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_display_events() {
        assert!(PlaybackEvent::PlaylistChanged { length: 3 }.affects_track_display());
        assert!(PlaybackEvent::TrackChanged {
            track_id: TrackId::new(1),
            index: 0,
            previous_track_id: None,
        }
        .affects_track_display());
        assert!(!PlaybackEvent::VolumeChanged { volume: 0.5 }.affects_track_display());
    }

    #[test]
    fn events_serialize_with_variant_tag() {
        let json = serde_json::to_value(PlaybackEvent::StateChanged {
            phase: PlaybackPhase::LoadedPaused,
        })
        .unwrap();
        assert_eq!(json["StateChanged"]["phase"], "LoadedPaused");
    }
}
