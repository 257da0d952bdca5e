//! Platform-agnostic audio primitive trait
//!
//! Abstracts the media element the controller drives (a browser
//! `HtmlAudioElement`, a simulated clock in the terminal player, a mock in
//! tests).

use crate::error::AudioError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a listener registered on an audio primitive
///
/// Assigned by the primitive; unique for the primitive's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kinds of notification a primitive can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioEventKind {
    /// Enough media is buffered to play through (one-shot per load)
    ReadyToPlay,
    /// Loading or playback failed (one-shot per load)
    Error,
    /// Playback reached the end of the media
    Finished,
    /// Playback position moved (periodic)
    TimeAdvanced,
}

/// Notification payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AudioEvent {
    ReadyToPlay,
    Error { message: String },
    Finished,
    TimeAdvanced,
}

impl AudioEvent {
    pub fn kind(&self) -> AudioEventKind {
        match self {
            AudioEvent::ReadyToPlay => AudioEventKind::ReadyToPlay,
            AudioEvent::Error { .. } => AudioEventKind::Error,
            AudioEvent::Finished => AudioEventKind::Finished,
            AudioEvent::TimeAdvanced => AudioEventKind::TimeAdvanced,
        }
    }
}

/// A notification addressed to one registered listener
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioNotification {
    /// Listener the primitive fired
    pub listener: ListenerId,
    /// What happened
    pub event: AudioEvent,
}

impl AudioNotification {
    pub fn new(listener: ListenerId, event: AudioEvent) -> Self {
        Self { listener, event }
    }
}

/// Media element driven by the playback controller
///
/// Commands are fire-and-forget; outcomes arrive later as notifications to
/// listeners registered with [`AudioPrimitive::add_listener`]. The host
/// delivers those notifications to
/// [`PlaybackController::handle_notification`](crate::PlaybackController::handle_notification)
/// one at a time.
pub trait AudioPrimitive {
    /// Point the primitive at a new media URL
    fn set_source(&mut self, url: &str);

    /// Start loading the current source; resets the position to zero
    fn load(&mut self);

    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the primitive rejects the request outright.
    /// Failures discovered later are reported through `Error` listeners.
    fn play(&mut self) -> std::result::Result<(), AudioError>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Set output volume in [0, 1]
    fn set_volume(&mut self, volume: f32);

    /// Mute or unmute without touching the volume
    fn set_muted(&mut self, muted: bool);

    /// Current playback position in seconds
    fn position_secs(&self) -> f64;

    /// Register a listener for `kind` and return its id
    fn add_listener(&mut self, kind: AudioEventKind) -> ListenerId;

    /// Unregister a listener; unknown ids are ignored
    fn remove_listener(&mut self, id: ListenerId);
}

impl<A: AudioPrimitive + ?Sized> AudioPrimitive for Box<A> {
    fn set_source(&mut self, url: &str) {
        (**self).set_source(url);
    }

    fn load(&mut self) {
        (**self).load();
    }

    fn play(&mut self) -> std::result::Result<(), AudioError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }

    fn position_secs(&self) -> f64 {
        (**self).position_secs()
    }

    fn add_listener(&mut self, kind: AudioEventKind) -> ListenerId {
        (**self).add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id);
    }
}

/// Recording primitive for unit tests
///
/// Logs every command and tracks live listeners so tests can assert the
/// exact command sequence and that no listener leaks.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Command {
        SetSource(String),
        Load,
        Play,
        Pause,
        SetVolume(f32),
        SetMuted(bool),
    }

    #[derive(Debug, Default)]
    pub struct RecordingAudio {
        pub commands: Vec<Command>,
        pub listeners: BTreeMap<u64, AudioEventKind>,
        pub position: f64,
        pub reject_play: bool,
        pub(crate) next_id: u64,
    }

    impl RecordingAudio {
        pub fn listener_for(&self, kind: AudioEventKind) -> Option<ListenerId> {
            self.listeners
                .iter()
                .filter(|(_, k)| **k == kind)
                .map(|(id, _)| ListenerId::new(*id))
                .last()
        }

        pub fn count(&self, kind: AudioEventKind) -> usize {
            self.listeners.values().filter(|k| **k == kind).count()
        }

        pub fn fire(&self, kind: AudioEventKind, event: AudioEvent) -> AudioNotification {
            let listener = self
                .listener_for(kind)
                .unwrap_or_else(|| panic!("no listener registered for {kind:?}"));
            AudioNotification::new(listener, event)
        }
    }

    impl AudioPrimitive for RecordingAudio {
        fn set_source(&mut self, url: &str) {
            self.commands.push(Command::SetSource(url.to_string()));
        }

        fn load(&mut self) {
            self.position = 0.0;
            self.commands.push(Command::Load);
        }

        fn play(&mut self) -> std::result::Result<(), AudioError> {
            self.commands.push(Command::Play);
            if self.reject_play {
                Err(AudioError::PlayRejected("autoplay blocked".into()))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.commands.push(Command::Pause);
        }

        fn set_volume(&mut self, volume: f32) {
            self.commands.push(Command::SetVolume(volume));
        }

        fn set_muted(&mut self, muted: bool) {
            self.commands.push(Command::SetMuted(muted));
        }

        fn position_secs(&self) -> f64 {
            self.position
        }

        fn add_listener(&mut self, kind: AudioEventKind) -> ListenerId {
            self.next_id += 1;
            self.listeners.insert(self.next_id, kind);
            ListenerId::new(self.next_id)
        }

        fn remove_listener(&mut self, id: ListenerId) {
            self.listeners.remove(&id.get());
        }
    }
}
