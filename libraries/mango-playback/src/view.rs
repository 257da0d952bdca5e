//! Presentation snapshot and pluggable view
//!
//! The controller knows nothing about how the player card is drawn. It
//! produces a [`PlayerSnapshot`] and any [`PlayerView`] renders it.

use crate::types::PlaybackPhase;
use serde::{Deserialize, Serialize};

/// Everything a player card needs to draw itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub phase: PlaybackPhase,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub picture_url: Option<String>,
    pub index: Option<usize>,
    pub track_count: usize,
    pub is_playing: bool,
    pub volume: f32,
    pub elapsed_seconds: f64,
    pub duration_seconds: f64,
    pub progress_percent: f64,
    pub elapsed_label: String,
    pub duration_label: String,
}

impl PlayerSnapshot {
    /// Transport controls are only live with a non-empty playlist
    pub fn controls_enabled(&self) -> bool {
        self.track_count > 0
    }
}

/// Presentation layer fed by the controller's snapshots
pub trait PlayerView {
    fn render(&mut self, snapshot: &PlayerSnapshot);
}

/// Format seconds as `m:ss`
///
/// Minutes are not padded, seconds are; fractions are truncated. Negative or
/// non-finite input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}
