/// Simulated audio primitive for the terminal player
///
/// Nothing is decoded. A clock advances the playhead of the loaded source
/// and raises the notifications a media element would.
use mango_core::Track;
use mango_playback::{
    AudioError, AudioEvent, AudioEventKind, AudioNotification, AudioPrimitive, ListenerId,
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use url::Url;

/// Media URL schemes the clock accepts
const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// Outcome of the last load, reported on the next tick
#[derive(Debug, Clone, PartialEq)]
enum LoadOutcome {
    Ready,
    Failed(String),
}

#[derive(Debug, Default)]
struct ClockState {
    durations: HashMap<String, f64>,
    listeners: BTreeMap<u64, AudioEventKind>,
    next_id: u64,

    source: Option<String>,
    duration: f64,
    position: f64,
    playing: bool,
    ready: bool,
    failed: bool,
    pending: Option<LoadOutcome>,
    muted: bool,
    volume: f32,
}

impl ClockState {
    fn notify(&self, tx: &mpsc::UnboundedSender<AudioNotification>, event: &AudioEvent) {
        let kind = event.kind();
        for (id, _) in self.listeners.iter().filter(|(_, k)| **k == kind) {
            // Receiver gone means the session is shutting down
            let _ = tx.send(AudioNotification::new(ListenerId::new(*id), event.clone()));
        }
    }
}

fn lock(state: &Mutex<ClockState>) -> MutexGuard<'_, ClockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check_source(url: &str) -> Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| format!("invalid media URL {url:?}: {e}"))?;
    if SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        Ok(())
    } else {
        Err(format!("unsupported media scheme {:?}", parsed.scheme()))
    }
}

/// The primitive handed to the controller
#[derive(Debug)]
pub struct ClockAudio {
    state: Arc<Mutex<ClockState>>,
    tx: mpsc::UnboundedSender<AudioNotification>,
}

/// Session-side handle that moves the clock
#[derive(Debug, Clone)]
pub struct ClockDriver {
    state: Arc<Mutex<ClockState>>,
    tx: mpsc::UnboundedSender<AudioNotification>,
}

/// Create a primitive, its driver, and the channel its notifications arrive on
pub fn clock_audio() -> (
    ClockAudio,
    ClockDriver,
    mpsc::UnboundedReceiver<AudioNotification>,
) {
    let state = Arc::new(Mutex::new(ClockState::default()));
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ClockAudio {
            state: Arc::clone(&state),
            tx: tx.clone(),
        },
        ClockDriver { state, tx },
        rx,
    )
}

impl ClockDriver {
    /// Remember track durations so loads of their URLs know when to finish
    pub fn register_tracks<'a>(&self, tracks: impl IntoIterator<Item = &'a Track>) {
        let mut state = lock(&self.state);
        for track in tracks {
            state
                .durations
                .insert(track.file_url.clone(), track.duration_seconds);
        }
    }

    /// Advance the clock by `elapsed`
    ///
    /// Reports the outcome of a pending load first, then moves the playhead
    /// if playing: time-advanced on every tick, finished at the end.
    pub fn tick(&self, elapsed: Duration) {
        let mut state = lock(&self.state);

        if let Some(outcome) = state.pending.take() {
            match outcome {
                LoadOutcome::Ready => {
                    state.ready = true;
                    state.notify(&self.tx, &AudioEvent::ReadyToPlay);
                }
                LoadOutcome::Failed(message) => {
                    warn!(error = %message, "Media failed to load");
                    state.failed = true;
                    state.playing = false;
                    state.notify(&self.tx, &AudioEvent::Error { message });
                }
            }
            return;
        }

        if !(state.playing && state.ready) {
            return;
        }

        state.position += elapsed.as_secs_f64();
        if state.duration > 0.0 && state.position >= state.duration {
            state.position = state.duration;
            state.playing = false;
            state.notify(&self.tx, &AudioEvent::TimeAdvanced);
            state.notify(&self.tx, &AudioEvent::Finished);
        } else {
            state.notify(&self.tx, &AudioEvent::TimeAdvanced);
        }
    }

    pub fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    pub fn is_muted(&self) -> bool {
        lock(&self.state).muted
    }

    pub fn volume(&self) -> f32 {
        lock(&self.state).volume
    }

    pub fn source(&self) -> Option<String> {
        lock(&self.state).source.clone()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.state).listeners.len()
    }
}

impl AudioPrimitive for ClockAudio {
    fn set_source(&mut self, url: &str) {
        let mut state = lock(&self.state);
        state.duration = state.durations.get(url).copied().unwrap_or(0.0);
        state.source = Some(url.to_string());
    }

    fn load(&mut self) {
        let mut state = lock(&self.state);
        state.position = 0.0;
        state.playing = false;
        state.ready = false;
        state.failed = false;
        state.pending = Some(match state.source.as_deref().map(check_source) {
            Some(Ok(())) => LoadOutcome::Ready,
            Some(Err(message)) => LoadOutcome::Failed(message),
            None => LoadOutcome::Failed("no source set".to_string()),
        });
        debug!(source = ?state.source, duration = state.duration, "Clock loaded source");
    }

    fn play(&mut self) -> Result<(), AudioError> {
        let mut state = lock(&self.state);
        if state.source.is_none() {
            return Err(AudioError::PlayRejected("no source set".to_string()));
        }
        if state.failed {
            return Err(AudioError::Media("source failed to load".to_string()));
        }
        // Starting after the end restarts, like a media element
        if state.duration > 0.0 && state.position >= state.duration {
            state.position = 0.0;
        }
        state.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        lock(&self.state).playing = false;
    }

    fn set_volume(&mut self, volume: f32) {
        lock(&self.state).volume = volume;
    }

    fn set_muted(&mut self, muted: bool) {
        lock(&self.state).muted = muted;
    }

    fn position_secs(&self) -> f64 {
        lock(&self.state).position
    }

    fn add_listener(&mut self, kind: AudioEventKind) -> ListenerId {
        let mut state = lock(&self.state);
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.insert(id, kind);
        ListenerId::new(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        lock(&self.state).listeners.remove(&id.get());
    }
}
