//! Melodic Mango Player Library
//!
//! Terminal front end for the playback controller: configuration, a
//! simulated audio clock, the text player card, and the interactive session.
//!
//! This library exposes the components for testing purposes.

pub mod backdrop;
pub mod clock_audio;
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal_view;

// Re-export commonly used types for convenience
pub use backdrop::Backdrop;
pub use clock_audio::{clock_audio, ClockAudio, ClockDriver};
pub use command::Command;
pub use config::PlayerConfig;
pub use error::{PlayerError, Result};
pub use session::Session;
pub use terminal_view::TerminalView;
