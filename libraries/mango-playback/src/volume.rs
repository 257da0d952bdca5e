//! Volume level
//!
//! The audio primitive takes a linear level in [0, 1] (the same scale as
//! `HTMLMediaElement.volume`), so no perceptual mapping happens here.

use crate::error::{PlaybackError, Result};

/// Default level the player starts at
pub const DEFAULT_VOLUME: f32 = 0.25;

/// Volume level clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    level: f32,
}

impl Volume {
    /// Create a volume, clamping `level` into range
    ///
    /// Non-finite input falls back to [`DEFAULT_VOLUME`].
    pub fn new(level: f32) -> Self {
        if level.is_finite() {
            Self {
                level: level.clamp(0.0, 1.0),
            }
        } else {
            Self::default()
        }
    }

    /// Set the level, clamping into [0, 1]
    ///
    /// Returns `Ok(true)` if the stored level changed.
    ///
    /// # Errors
    /// Rejects NaN and infinities; the stored level is left untouched.
    pub fn set_level(&mut self, level: f32) -> Result<bool> {
        if !level.is_finite() {
            return Err(PlaybackError::InvalidVolume(level));
        }
        let clamped = level.clamp(0.0, 1.0);
        let changed = clamped != self.level;
        self.level = clamped;
        Ok(changed)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Level as a whole percentage, for display
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            level: DEFAULT_VOLUME,
        }
    }
}
