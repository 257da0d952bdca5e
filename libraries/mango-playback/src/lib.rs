//! Melodic Mango - Playback Control
//!
//! Platform-agnostic playback controller for a single-playlist player.
//!
//! This crate provides:
//! - Transport state machine (play/pause toggle, next/previous with wrap-around)
//! - Deferred start: the first track starts muted once the media is ready
//! - Volume control (linear, 0-1)
//! - Listener lifecycle on the audio primitive (one-shot per load, repeating per session)
//! - Presentation snapshots for any [`PlayerView`]
//!
//! # Architecture
//!
//! `mango-playback` does not know what plays the audio:
//! - A browser `HtmlAudioElement` (the `wasm` feature)
//! - A simulated clock in the terminal player
//! - A recording mock in tests
//!
//! The media element is provided through the [`AudioPrimitive`] trait, the
//! playlist through [`mango_core::PlaylistSource`].
//!
//! # Example
//!
//! ```rust,no_run
//! use mango_core::{Track, TrackId};
//! use mango_playback::{AudioPrimitive, PlaybackConfig, PlaybackController};
//!
//! fn run<A: AudioPrimitive>(audio: A) {
//!     let mut controller = PlaybackController::new(audio, PlaybackConfig::default());
//!
//!     controller.replace_playlist(vec![
//!         Track::new(TrackId::new(1), "Mango Tango", "https://cdn.example.com/1.mp3"),
//!         Track::new(TrackId::new(2), "Papaya Dub", "https://cdn.example.com/2.mp3"),
//!     ]);
//!
//!     // Loads track 0; it starts once the primitive reports ready
//!     controller.toggle_play_pause();
//!
//!     // Wraps 0 -> 1 -> 0
//!     controller.next();
//!     controller.next();
//!
//!     for event in controller.drain_events() {
//!         println!("{event:?}");
//!     }
//! }
//! ```

mod audio;
mod controller;
mod error;
mod events;
mod subscription;
pub mod types;
mod view;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use audio::{AudioEvent, AudioEventKind, AudioNotification, AudioPrimitive, ListenerId};
pub use controller::PlaybackController;
pub use error::{AudioError, PlaybackError, Result};
pub use events::PlaybackEvent;
pub use subscription::{Lifetime, Subscription, Subscriptions};
pub use types::{PlaybackConfig, PlaybackPhase, PlaybackState};
pub use view::{format_time, PlayerSnapshot, PlayerView};
pub use volume::{Volume, DEFAULT_VOLUME};
