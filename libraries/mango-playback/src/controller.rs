//! Playback controller - transport state machine
//!
//! Owns the playlist, the playback state and the audio primitive, and turns
//! user intents and primitive notifications into primitive commands.

use crate::{
    audio::{AudioEvent, AudioEventKind, AudioNotification, AudioPrimitive},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    subscription::{Lifetime, Subscriptions},
    types::{PlaybackConfig, PlaybackPhase, PlaybackState},
    view::{format_time, PlayerSnapshot, PlayerView},
    volume::Volume,
};
use mango_core::{Playlist, PlaylistSource, Track, TrackId};
use tracing::{debug, error, info, warn};

/// What to do when the ready notification for a load arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartMode {
    /// Start playback (muted-primed if configured) once ready
    OnReady,
    /// Play was already issued with the load; ready only settles it
    Immediate,
    /// Paused before ready; only undo the priming
    Hold,
}

/// A load issued to the primitive that has not reported ready or error yet
#[derive(Debug, Clone, Copy)]
struct PendingLoad {
    start: StartMode,
    /// `is_playing` before this load, restored if it fails
    was_playing: bool,
    /// The primitive was muted for this load
    primed: bool,
}

/// Central playback control
///
/// State machine over [`PlaybackPhase`]:
/// - `Empty` until a non-empty playlist arrives
/// - `Uninitialized` until the first user-initiated playback request
/// - `LoadedPlaying` / `LoadedPaused` afterwards
///
/// Every transport action is a no-op on an empty playlist. Index arithmetic
/// wraps in both directions.
///
/// The controller registers its listeners on the primitive through
/// [`Subscriptions`]: ready/error are one-shot per load, finished and
/// time-advanced are repeating for as long as the controller is mounted.
/// Dropping the controller unregisters everything.
pub struct PlaybackController<A: AudioPrimitive> {
    audio: A,
    config: PlaybackConfig,

    // Playlist and position
    playlist: Playlist,
    current_index: usize,
    loaded_index: Option<usize>,

    // Transport
    is_playing: bool,
    is_initialized: bool,
    volume: Volume,
    elapsed_seconds: f64,
    pending: Option<PendingLoad>,
    consecutive_failures: usize,

    // Listener lifecycle
    subscriptions: Subscriptions,
    mounted: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
    last_phase: PlaybackPhase,
}

impl<A: AudioPrimitive> PlaybackController<A> {
    /// Create a controller over `audio` and mount it
    pub fn new(audio: A, config: PlaybackConfig) -> Self {
        let volume = Volume::new(config.initial_volume);
        let mut controller = Self {
            audio,
            config,
            playlist: Playlist::new(),
            current_index: 0,
            loaded_index: None,
            is_playing: false,
            is_initialized: false,
            volume,
            elapsed_seconds: 0.0,
            pending: None,
            consecutive_failures: 0,
            subscriptions: Subscriptions::new(),
            mounted: false,
            pending_events: Vec::new(),
            last_phase: PlaybackPhase::Empty,
        };
        controller.mount();
        controller
    }

    // ===== Session lifecycle =====

    /// Register the session-long listeners (finished, time-advanced)
    ///
    /// Called by [`new`](Self::new); calling it again while mounted does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.subscriptions
            .acquire(&mut self.audio, AudioEventKind::Finished, Lifetime::Repeating);
        self.subscriptions
            .acquire(&mut self.audio, AudioEventKind::TimeAdvanced, Lifetime::Repeating);
        self.mounted = true;
        debug!("Playback controller mounted");
    }

    /// Unregister every listener and drop any in-flight load
    ///
    /// Safe to call more than once; also runs on drop.
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            if pending.primed {
                self.audio.set_muted(false);
            }
        }
        self.subscriptions.release_all(&mut self.audio);
        if self.mounted {
            debug!("Playback controller torn down");
        }
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ===== Playlist =====

    /// Fetch the playlist from `source` and replace the current one
    ///
    /// On failure the error is logged and queued as an event, and the
    /// current playlist (empty at start-up) is kept.
    pub async fn refresh_from<S: PlaylistSource + ?Sized>(&mut self, source: &S) -> Result<usize> {
        match source.fetch_all().await {
            Ok(tracks) => {
                let len = tracks.len();
                self.replace_playlist(tracks);
                Ok(len)
            }
            Err(e) => {
                let err = PlaybackError::FetchFailure(e.to_string());
                error!(error = %e, "Error fetching songs");
                self.emit(PlaybackEvent::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Replace the playlist and reset to `Uninitialized` (or `Empty`)
    ///
    /// The index returns to 0 and the controller must be initialised again;
    /// `is_playing` is left alone.
    pub fn replace_playlist(&mut self, tracks: impl Into<Playlist>) {
        if let Some(pending) = self.pending.take() {
            if pending.primed {
                self.audio.set_muted(false);
            }
        }
        // A load for the old playlist must not settle against the new one
        self.subscriptions.release_one_shots(&mut self.audio);

        self.playlist = tracks.into();
        self.current_index = 0;
        self.loaded_index = None;
        self.is_initialized = false;
        self.elapsed_seconds = 0.0;
        self.consecutive_failures = 0;

        info!(tracks = self.playlist.len(), "Playlist loaded");
        self.emit(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
        self.emit_phase_if_changed();
    }

    // ===== Transport =====

    /// Toggle between playing and paused
    ///
    /// The first call for a playlist loads the current track and starts it
    /// once the primitive is ready.
    pub fn toggle_play_pause(&mut self) -> PlaybackPhase {
        match self.phase() {
            PlaybackPhase::Empty => debug!("Toggle ignored: playlist is empty"),
            PlaybackPhase::Uninitialized => self.initialize(),
            PlaybackPhase::LoadedPlaying => self.pause(),
            PlaybackPhase::LoadedPaused => self.resume(),
        }
        self.emit_phase_if_changed();
        self.phase()
    }

    /// Skip to the next track, wrapping to the first
    pub fn next(&mut self) -> PlaybackPhase {
        self.skip(1);
        self.phase()
    }

    /// Go back one track, wrapping to the last
    pub fn previous(&mut self) -> PlaybackPhase {
        self.skip(-1);
        self.phase()
    }

    /// Set output volume in [0, 1]
    ///
    /// Out-of-range values are clamped. Never changes the index or playing
    /// flag.
    ///
    /// # Errors
    /// Rejects NaN and infinities without touching the primitive.
    pub fn set_volume(&mut self, volume: f32) -> Result<f32> {
        let changed = self.volume.set_level(volume).map_err(|e| {
            warn!(volume, "Rejected volume change");
            e
        })?;
        let level = self.volume.level();
        self.audio.set_volume(level);
        if changed {
            debug!(volume = level, "Volume changed");
            self.emit(PlaybackEvent::VolumeChanged { volume: level });
        }
        Ok(level)
    }

    // ===== Primitive notifications =====

    /// Handle one notification from the audio primitive
    ///
    /// Notifications addressed to listeners that were already released
    /// (superseded loads, fired one-shots) are ignored.
    pub fn handle_notification(&mut self, notification: AudioNotification) {
        let Some(subscription) = self
            .subscriptions
            .claim(&mut self.audio, notification.listener)
        else {
            debug!(listener = %notification.listener, "Ignoring notification for released listener");
            return;
        };

        if subscription.kind != notification.event.kind() {
            warn!(
                listener = %notification.listener,
                expected = ?subscription.kind,
                got = ?notification.event.kind(),
                "Notification kind does not match its listener"
            );
            return;
        }

        match notification.event {
            AudioEvent::ReadyToPlay => self.on_ready(),
            AudioEvent::Error { message } => self.on_error(message),
            AudioEvent::Finished => self.on_finished(),
            AudioEvent::TimeAdvanced => self.on_time_advanced(),
        }
        self.emit_phase_if_changed();
    }

    // ===== State Queries =====

    pub fn phase(&self) -> PlaybackPhase {
        if self.playlist.is_empty() {
            PlaybackPhase::Empty
        } else if !self.is_initialized {
            PlaybackPhase::Uninitialized
        } else if self.is_playing
            || matches!(
                self.pending,
                Some(PendingLoad {
                    start: StartMode::OnReady,
                    ..
                })
            )
        {
            PlaybackPhase::LoadedPlaying
        } else {
            PlaybackPhase::LoadedPaused
        }
    }

    /// Snapshot of the observable state
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_initialized: self.is_initialized,
            volume: self.volume.level(),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    /// Track at the current index (shown before initialisation too)
    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.current_index)
    }

    /// Current index, `None` while the playlist is empty
    pub fn current_index(&self) -> Option<usize> {
        (!self.playlist.is_empty()).then_some(self.current_index)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// A load was issued and has not reported ready or error yet
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Elapsed time as a percentage of the current track, clamped to [0, 100]
    pub fn progress_percent(&self) -> f64 {
        self.current_track()
            .map_or(0.0, |t| t.progress_percent(self.elapsed_seconds))
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Read-only access to the primitive
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    // ===== Presentation =====

    pub fn snapshot(&self) -> PlayerSnapshot {
        let track = self.current_track();
        let duration_seconds = track.map_or(0.0, |t| t.duration_seconds);
        PlayerSnapshot {
            phase: self.phase(),
            title: track.map(|t| t.title.clone()),
            artist: track.map(|t| t.artist.clone()),
            album: track.map(|t| t.album.clone()),
            picture_url: track.map(|t| t.picture_url.clone()),
            index: self.current_index(),
            track_count: self.playlist.len(),
            is_playing: self.is_playing,
            volume: self.volume.level(),
            elapsed_seconds: self.elapsed_seconds,
            duration_seconds,
            progress_percent: self.progress_percent(),
            elapsed_label: format_time(self.elapsed_seconds),
            duration_label: format_time(duration_seconds),
        }
    }

    /// Render the current snapshot into `view`
    pub fn render(&self, view: &mut dyn PlayerView) {
        view.render(&self.snapshot());
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn initialize(&mut self) {
        let Some(index) = self.playlist.wrap(self.current_index) else {
            return;
        };
        let was_playing = self.is_playing;
        self.is_initialized = true;
        self.load_track(index, StartMode::OnReady, was_playing);
    }

    fn pause(&mut self) {
        self.audio.pause();
        self.is_playing = false;
        if let Some(pending) = self.pending.as_mut() {
            if pending.start == StartMode::OnReady {
                pending.start = StartMode::Hold;
            }
            pending.was_playing = false;
        }
        debug!(index = self.current_index, "Paused");
    }

    fn resume(&mut self) {
        // Still waiting for ready: let the ready handler start it
        if let Some(pending) = self.pending.as_mut() {
            if pending.start == StartMode::Hold {
                pending.start = StartMode::OnReady;
                return;
            }
        }

        match self.audio.play() {
            Ok(()) => {
                self.is_playing = true;
                debug!(index = self.current_index, "Resumed");
            }
            Err(e) => self.report_failure(self.current_index, e.to_string()),
        }
    }

    fn skip(&mut self, offset: isize) {
        let Some(target) = self.playlist.step(self.current_index, offset) else {
            debug!("Skip ignored: playlist is empty");
            return;
        };
        self.jump_to(target);
    }

    /// Load `index` and start it right away, skipping on if enabled
    fn jump_to(&mut self, index: usize) {
        if !self.start_track(index) && self.config.skip_on_error {
            self.skip_failed_tracks();
        }
    }

    /// Load `index` and call `play()`; false when the primitive refused
    fn start_track(&mut self, index: usize) -> bool {
        let was_playing = self.is_playing;
        self.is_initialized = true;
        self.load_track(index, StartMode::Immediate, was_playing);

        let started = match self.audio.play() {
            Ok(()) => {
                self.is_playing = true;
                true
            }
            Err(e) => {
                let pending = self.pending.take();
                self.settle_failure(pending, e.to_string());
                false
            }
        };
        self.emit_phase_if_changed();
        started
    }

    fn load_track(&mut self, index: usize, start: StartMode, was_playing: bool) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };
        let url = track.file_url.clone();
        let track_id = track.id;
        let previous_track_id = self
            .loaded_index
            .and_then(|i| self.playlist.get(i))
            .map(|t| t.id);

        // Supersede any in-flight load
        let prime = start == StartMode::OnReady && self.config.prime_muted;
        if let Some(old) = self.pending.take() {
            if old.primed && !prime {
                self.audio.set_muted(false);
            }
        }
        self.subscriptions.release_one_shots(&mut self.audio);

        self.subscriptions
            .acquire(&mut self.audio, AudioEventKind::ReadyToPlay, Lifetime::OneShot);
        self.subscriptions
            .acquire(&mut self.audio, AudioEventKind::Error, Lifetime::OneShot);
        if self.mounted {
            // New track identity: fresh time listener
            self.subscriptions
                .release_kind(&mut self.audio, AudioEventKind::TimeAdvanced);
            self.subscriptions
                .acquire(&mut self.audio, AudioEventKind::TimeAdvanced, Lifetime::Repeating);
        }

        if prime {
            self.audio.set_muted(true);
        }
        self.audio.set_source(&url);
        self.audio.load();
        self.audio.set_volume(self.volume.level());

        self.current_index = index;
        self.loaded_index = Some(index);
        self.elapsed_seconds = 0.0;
        self.pending = Some(PendingLoad {
            start,
            was_playing,
            primed: prime,
        });

        debug!(index, track_id = %track_id, url = %url, "Loading track");
        self.emit(PlaybackEvent::TrackChanged {
            track_id,
            index,
            previous_track_id,
        });
    }

    fn on_ready(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.consecutive_failures = 0;

        match pending.start {
            StartMode::OnReady => match self.audio.play() {
                Ok(()) => {
                    self.is_playing = true;
                    if pending.primed {
                        self.audio.set_muted(false);
                    }
                    debug!(index = self.current_index, "Track ready, playing");
                }
                Err(e) => self.fail_load(Some(pending), e.to_string()),
            },
            StartMode::Immediate => {
                debug!(index = self.current_index, "Track ready");
            }
            StartMode::Hold => {
                if pending.primed {
                    self.audio.set_muted(false);
                }
                debug!(index = self.current_index, "Track ready, held paused");
            }
        }
    }

    fn on_error(&mut self, message: String) {
        let pending = self.pending.take();
        self.fail_load(pending, message);
    }

    fn on_finished(&mut self) {
        if !(self.is_initialized && self.is_playing) {
            debug!("Finished ignored: not playing");
            return;
        }
        if let Some(track) = self.current_track() {
            let track_id = track.id;
            self.emit(PlaybackEvent::TrackFinished { track_id });
        }
        if let Some(next) = self.playlist.step(self.current_index, 1) {
            self.jump_to(next);
        }
    }

    fn on_time_advanced(&mut self) {
        if !self.is_initialized {
            return;
        }
        let position = self.audio.position_secs();
        if !position.is_finite() {
            return;
        }
        self.elapsed_seconds = position.max(0.0);
        let duration_seconds = self.current_track().map_or(0.0, |t| t.duration_seconds);
        self.emit(PlaybackEvent::PositionUpdate {
            elapsed_seconds: self.elapsed_seconds,
            duration_seconds,
        });
    }

    /// A load or start failed: restore `is_playing`, log, maybe skip
    fn fail_load(&mut self, pending: Option<PendingLoad>, message: String) {
        self.settle_failure(pending, message);
        if self.config.skip_on_error {
            self.skip_failed_tracks();
        }
    }

    fn settle_failure(&mut self, pending: Option<PendingLoad>, message: String) {
        if let Some(pending) = pending {
            self.is_playing = pending.was_playing;
            if pending.primed {
                self.audio.set_muted(false);
            }
        }
        self.subscriptions.release_one_shots(&mut self.audio);
        self.report_failure(self.current_index, message);
    }

    /// Step forward past the failed track until a start is accepted
    ///
    /// Gives up after one failure per track in the playlist. Starts that are
    /// accepted but fail later come back through `fail_load` and keep
    /// counting.
    fn skip_failed_tracks(&mut self) {
        loop {
            self.consecutive_failures += 1;
            if self.consecutive_failures >= self.playlist.len() {
                warn!(
                    failures = self.consecutive_failures,
                    "Every track failed in a row, not skipping further"
                );
                self.consecutive_failures = 0;
                return;
            }
            let Some(next) = self.playlist.step(self.current_index, 1) else {
                return;
            };
            info!(index = next, "Skipping to next track after failure");
            if self.start_track(next) {
                return;
            }
        }
    }

    fn report_failure(&mut self, index: usize, message: String) {
        let track_id = self
            .playlist
            .get(index)
            .map_or(TrackId::new(-1), |t| t.id);
        let err = PlaybackError::PlaybackFailure { track_id, message };
        warn!(index, error = %err, "Error playing song");
        self.emit(PlaybackEvent::Error {
            message: err.to_string(),
        });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_phase_if_changed(&mut self) {
        let phase = self.phase();
        if phase != self.last_phase {
            self.last_phase = phase;
            self.emit(PlaybackEvent::StateChanged { phase });
        }
    }
}

impl<A: AudioPrimitive> Drop for PlaybackController<A> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::{Command, RecordingAudio};

    fn tracks(n: i64) -> Vec<Track> {
        (0..n)
            .map(|i| {
                Track::new(TrackId::new(i), format!("Track {i}"), format!("https://cdn/{i}.mp3"))
                    .with_duration_seconds(100.0)
            })
            .collect()
    }

    fn controller(n: i64) -> PlaybackController<RecordingAudio> {
        let mut c = PlaybackController::new(RecordingAudio::default(), PlaybackConfig::default());
        c.replace_playlist(tracks(n));
        c
    }

    fn ready(c: &mut PlaybackController<RecordingAudio>) {
        let n = c.audio().fire(AudioEventKind::ReadyToPlay, AudioEvent::ReadyToPlay);
        c.handle_notification(n);
    }

    #[test]
    fn first_toggle_primes_muted_then_unmutes_on_ready() {
        let mut c = controller(2);
        c.toggle_play_pause();

        assert_eq!(
            c.audio().commands,
            vec![
                Command::SetMuted(true),
                Command::SetSource("https://cdn/0.mp3".into()),
                Command::Load,
                Command::SetVolume(0.25),
            ]
        );
        assert!(!c.is_playing());
        assert!(c.is_loading());

        ready(&mut c);
        assert!(c.is_playing());
        assert!(!c.is_loading());
        assert_eq!(
            &c.audio().commands[4..],
            &[Command::Play, Command::SetMuted(false)]
        );
    }

    #[test]
    fn pausing_before_ready_holds_the_track() {
        let mut c = controller(2);
        c.toggle_play_pause();
        assert_eq!(c.toggle_play_pause(), PlaybackPhase::LoadedPaused);

        ready(&mut c);
        assert!(!c.is_playing());
        assert_eq!(c.phase(), PlaybackPhase::LoadedPaused);
        assert!(!c.audio().commands.contains(&Command::Play));
        assert_eq!(c.audio().commands.last(), Some(&Command::SetMuted(false)));
    }

    #[test]
    fn resuming_a_held_load_waits_for_ready() {
        let mut c = controller(2);
        c.toggle_play_pause();
        c.toggle_play_pause();
        assert_eq!(c.toggle_play_pause(), PlaybackPhase::LoadedPlaying);
        assert!(!c.is_playing());

        ready(&mut c);
        assert!(c.is_playing());
    }

    #[test]
    fn stale_ready_from_superseded_load_is_ignored() {
        let mut c = controller(3);
        c.toggle_play_pause();
        let stale = c.audio().fire(AudioEventKind::ReadyToPlay, AudioEvent::ReadyToPlay);

        c.next();
        let plays_before = c.audio().commands.iter().filter(|c| **c == Command::Play).count();
        c.handle_notification(stale);
        let plays_after = c.audio().commands.iter().filter(|c| **c == Command::Play).count();

        assert_eq!(plays_before, plays_after);
        assert_eq!(c.audio().count(AudioEventKind::ReadyToPlay), 1);
    }

    #[test]
    fn error_restores_previous_playing_flag() {
        let mut c = controller(3);
        c.toggle_play_pause();
        ready(&mut c);
        assert!(c.is_playing());

        c.toggle_play_pause();
        assert!(!c.is_playing());

        c.next();
        assert!(c.is_playing());
        let err = c.audio().fire(
            AudioEventKind::Error,
            AudioEvent::Error {
                message: "404".into(),
            },
        );
        c.handle_notification(err);

        assert!(!c.is_playing());
        assert_eq!(c.current_index(), Some(1));
        assert!(c
            .drain_events()
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Error { .. })));
    }

    #[test]
    fn skip_on_error_stops_after_a_full_cycle() {
        let mut c = PlaybackController::new(
            RecordingAudio {
                reject_play: true,
                ..Default::default()
            },
            PlaybackConfig {
                skip_on_error: true,
                ..Default::default()
            },
        );
        c.replace_playlist(tracks(3));

        c.next();
        // 3 tracks, each rejected once: 1 -> 2 -> 0 then stop
        let loads = c.audio().commands.iter().filter(|c| **c == Command::Load).count();
        assert_eq!(loads, 3);
        assert!(!c.is_playing());
    }

    #[test]
    fn volume_is_applied_on_every_load() {
        let mut c = controller(2);
        c.set_volume(0.6).unwrap();
        c.next();
        assert!(c.audio().commands.contains(&Command::SetVolume(0.6)));
        let load_pos = c.audio().commands.iter().rposition(|c| *c == Command::Load).unwrap();
        assert_eq!(c.audio().commands[load_pos + 1], Command::SetVolume(0.6));
    }

    #[test]
    fn time_advanced_updates_elapsed() {
        let mut c = controller(1);
        c.toggle_play_pause();
        ready(&mut c);

        c.audio.position = 42.5;
        let tick = c.audio().fire(AudioEventKind::TimeAdvanced, AudioEvent::TimeAdvanced);
        c.handle_notification(tick);

        assert_eq!(c.elapsed_seconds(), 42.5);
        assert!((c.progress_percent() - 42.5).abs() < 1e-9);
    }

    #[test]
    fn drop_releases_all_listeners() {
        let mut c = controller(2);
        c.toggle_play_pause();
        assert!(!c.audio().listeners.is_empty());

        c.teardown();
        assert!(c.audio().listeners.is_empty());
        assert!(!c.is_mounted());
    }

    #[test]
    fn phase_events_are_deduplicated() {
        let mut c = controller(2);
        c.drain_events();

        c.set_volume(0.5).unwrap();
        c.set_volume(0.5).unwrap();
        let events = c.drain_events();
        assert_eq!(events, vec![PlaybackEvent::VolumeChanged { volume: 0.5 }]);
    }
}
