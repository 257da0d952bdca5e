//! WASM-compatible player wrapper

use super::audio::{HtmlAudio, Inbox, Wake};
use crate::{PlaybackConfig, PlaybackController, PlaybackEvent, PlayerSnapshot};
use js_sys::Function;
use mango_core::{SongRow, Track};
use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::{Rc, Weak},
};
use wasm_bindgen::prelude::*;

type SharedController = Rc<RefCell<PlaybackController<HtmlAudio>>>;

#[derive(Default)]
struct Callbacks {
    on_render: Option<Function>,
    on_event: Option<Function>,
}

/// WASM-compatible player
///
/// Wraps the controller with a JavaScript-friendly API. The render callback
/// receives a serialized `PlayerSnapshot` after every step that changed
/// something.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: SharedController,
    inbox: Inbox,
    callbacks: Rc<RefCell<Callbacks>>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a new player with its own `<audio>` element
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmPlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let inbox: Inbox = Rc::new(RefCell::new(VecDeque::new()));
        let wake: Wake = Rc::new(RefCell::new(None));
        let audio = HtmlAudio::new(Rc::clone(&inbox), Rc::clone(&wake))?;
        let inner = Rc::new(RefCell::new(PlaybackController::new(
            audio,
            PlaybackConfig::default(),
        )));
        let callbacks = Rc::new(RefCell::new(Callbacks::default()));

        let weak = Rc::downgrade(&inner);
        let wake_inbox = Rc::clone(&inbox);
        let wake_callbacks = Rc::clone(&callbacks);
        *wake.borrow_mut() = Some(Box::new(move || {
            pump(&weak, &wake_inbox, &wake_callbacks);
        }));

        Ok(Self {
            inner,
            inbox,
            callbacks,
        })
    }

    // ===== Playlist =====

    /// Replace the playlist with rows from the `songs` table
    ///
    /// Takes the array exactly as the catalog returns it
    /// (`{ id, title, artist, album, genre, duration, release_date, file, picture }`).
    #[wasm_bindgen(js_name = loadPlaylist)]
    pub fn load_playlist(&mut self, rows: JsValue) -> Result<(), JsValue> {
        let rows: Vec<SongRow> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse songs: {e}")))?;
        let tracks: Vec<Track> = rows.into_iter().map(Track::from).collect();

        self.inner.borrow_mut().replace_playlist(tracks);
        self.flush();
        Ok(())
    }

    // ===== Playback Control =====

    /// Play, pause, or load and start the first track
    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) {
        self.inner.borrow_mut().toggle_play_pause();
        self.flush();
    }

    /// Skip to next track
    pub fn next(&mut self) {
        self.inner.borrow_mut().next();
        self.flush();
    }

    /// Go to previous track
    pub fn previous(&mut self) {
        self.inner.borrow_mut().previous();
        self.flush();
    }

    /// Set volume (0-1)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, volume: f32) -> Result<f32, JsValue> {
        let result = self.inner.borrow_mut().set_volume(volume);
        self.flush();
        result.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // ===== State Queries =====

    /// Current presentation snapshot
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.inner.borrow().snapshot();
        serde_wasm_bindgen::to_value(&snapshot)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.borrow().is_playing()
    }

    #[wasm_bindgen(js_name = trackCount)]
    pub fn track_count(&self) -> usize {
        self.inner.borrow().track_count()
    }

    // ===== Event Listeners =====

    /// Register the render callback, called with a snapshot object
    #[wasm_bindgen(js_name = onRender)]
    pub fn on_render(&mut self, callback: Function) {
        self.callbacks.borrow_mut().on_render = Some(callback);
        self.flush_render();
    }

    /// Register a callback for individual playback events
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&mut self, callback: Function) {
        self.callbacks.borrow_mut().on_event = Some(callback);
    }

    // ===== Internal =====

    fn flush(&self) {
        pump(&Rc::downgrade(&self.inner), &self.inbox, &self.callbacks);
    }

    fn flush_render(&self) {
        let Ok(snapshot) = self.inner.try_borrow().map(|c| c.snapshot()) else {
            return;
        };
        render(&snapshot, &self.callbacks.borrow());
    }
}

/// Feed queued notifications to the controller and notify JavaScript
///
/// Does nothing while the controller is borrowed; the borrower flushes when
/// it returns.
fn pump(
    controller: &Weak<RefCell<PlaybackController<HtmlAudio>>>,
    inbox: &Inbox,
    callbacks: &Rc<RefCell<Callbacks>>,
) {
    let Some(shared) = controller.upgrade() else {
        return;
    };
    let Ok(mut controller) = shared.try_borrow_mut() else {
        return;
    };

    loop {
        let next = inbox.borrow_mut().pop_front();
        match next {
            Some(notification) => controller.handle_notification(notification),
            None => break,
        }
    }

    if !controller.has_pending_events() {
        return;
    }
    let events = controller.drain_events();
    let snapshot = controller.snapshot();
    // Callbacks may call back into the player
    drop(controller);

    let Ok(callbacks) = callbacks.try_borrow() else {
        return;
    };
    emit_events(&events, &callbacks);
    render(&snapshot, &callbacks);
}

fn emit_events(events: &[PlaybackEvent], callbacks: &Callbacks) {
    let Some(cb) = callbacks.on_event.as_ref() else {
        return;
    };
    for event in events {
        if let Ok(js_event) = serde_wasm_bindgen::to_value(event) {
            cb.call1(&JsValue::NULL, &js_event).ok();
        }
    }
}

fn render(snapshot: &PlayerSnapshot, callbacks: &Callbacks) {
    let Some(cb) = callbacks.on_render.as_ref() else {
        return;
    };
    if let Ok(js_snapshot) = serde_wasm_bindgen::to_value(snapshot) {
        cb.call1(&JsValue::NULL, &js_snapshot).ok();
    }
}
