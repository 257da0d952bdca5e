//! Shared helpers for playback integration tests

#![allow(dead_code)]

use mango_core::{Track, TrackId};
use mango_playback::{
    AudioError, AudioEvent, AudioEventKind, AudioNotification, AudioPrimitive, ListenerId,
    PlaybackConfig, PlaybackController,
};
use std::{cell::Cell, collections::BTreeMap, rc::Rc};

/// Command issued to the fake primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Source(String),
    Load,
    Play,
    Pause,
    Volume(f32),
    Muted(bool),
}

/// In-memory audio primitive that records every command
#[derive(Debug, Default)]
pub struct FakeAudio {
    pub ops: Vec<Op>,
    pub listeners: BTreeMap<u64, AudioEventKind>,
    pub source: Option<String>,
    /// Shared so tests can move the playhead while the controller owns the primitive
    pub position: Rc<Cell<f64>>,
    pub muted: bool,
    pub volume: f32,
    pub reject_play: bool,
    next_id: u64,
}

impl FakeAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject_play: true,
            ..Self::default()
        }
    }

    pub fn listener_count(&self, kind: AudioEventKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    /// Notification for the most recently registered listener of `kind`
    pub fn notify(&self, event: AudioEvent) -> Option<AudioNotification> {
        let kind = event.kind();
        self.listeners
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(id, _)| ListenerId::new(*id))
            .last()
            .map(|id| AudioNotification::new(id, event))
    }

    pub fn plays(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Play).count()
    }

    pub fn loads(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Load).count()
    }
}

impl AudioPrimitive for FakeAudio {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.ops.push(Op::Source(url.to_string()));
    }

    fn load(&mut self) {
        self.position.set(0.0);
        self.ops.push(Op::Load);
    }

    fn play(&mut self) -> Result<(), AudioError> {
        self.ops.push(Op::Play);
        if self.reject_play {
            return Err(AudioError::PlayRejected("NotAllowedError".into()));
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.ops.push(Op::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.ops.push(Op::Volume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.ops.push(Op::Muted(muted));
    }

    fn position_secs(&self) -> f64 {
        self.position.get()
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

pub type TestController = PlaybackController<FakeAudio>;

/// Track with a predictable media URL
pub fn track(id: i64, title: &str, duration_seconds: f64) -> Track {
    Track::new(
        TrackId::new(id),
        title,
        format!("https://cdn.example.com/songs/{id}.mp3"),
    )
    .with_artist("The Mangoes")
    .with_album("Ripe")
    .with_duration_seconds(duration_seconds)
}

pub fn tracks(n: usize) -> Vec<Track> {
    (0..n)
        .map(|i| track(i as i64 + 1, &format!("Song {}", i + 1), 120.0))
        .collect()
}

pub fn controller_with(tracks: Vec<Track>) -> TestController {
    let mut controller = PlaybackController::new(FakeAudio::new(), PlaybackConfig::default());
    controller.replace_playlist(tracks);
    controller
}

/// Deliver `event` to the controller's live listener for it
pub fn deliver(controller: &mut TestController, event: AudioEvent) {
    let notification = controller
        .audio()
        .notify(event)
        .expect("no live listener for event");
    controller.handle_notification(notification);
}

/// Start playback from Uninitialized and let the primitive become ready
pub fn start(controller: &mut TestController) {
    controller.toggle_play_pause();
    deliver(controller, AudioEvent::ReadyToPlay);
}
