//! Melodic Mango Core
//!
//! Platform-agnostic domain types, collaborator traits, and error handling
//! shared by the playback controller, the catalog client and the player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `Playlist`, and the catalog `SongRow`
//! - **Core Traits**: `PlaylistSource`
//! - **Error Handling**: Unified `MangoError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use mango_core::{Playlist, Track, TrackId};
//!
//! let track = Track::new(TrackId::new(1), "Mango Tango", "https://cdn.example.com/1.mp3")
//!     .with_duration_seconds(180.0);
//!
//! let playlist = Playlist::from(vec![track]);
//! assert_eq!(playlist.len(), 1);
//! assert_eq!(playlist.step(0, -1), Some(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MangoError, Result};
pub use traits::PlaylistSource;
pub use types::{Playlist, SongRow, Track, TrackId};
