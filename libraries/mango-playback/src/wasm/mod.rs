//! WASM bindings for mango-playback
//!
//! This module provides an `HtmlAudioElement` implementation of
//! [`AudioPrimitive`](crate::AudioPrimitive) and a JavaScript-facing player
//! wrapping the controller.

pub mod audio;
pub mod player;

pub use audio::HtmlAudio;
pub use player::WasmPlayer;
