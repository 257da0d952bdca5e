//! `HtmlAudioElement` audio primitive

use crate::{AudioError, AudioEvent, AudioEventKind, AudioNotification, AudioPrimitive, ListenerId};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlAudioElement};

/// Notifications waiting to be handed to the controller
pub type Inbox = Rc<RefCell<VecDeque<AudioNotification>>>;

/// Callback run after a notification is queued
pub type Wake = Rc<RefCell<Option<Box<dyn Fn()>>>>;

type Kinds = Rc<RefCell<HashMap<u64, AudioEventKind>>>;

fn dom_event(kind: AudioEventKind) -> &'static str {
    match kind {
        AudioEventKind::ReadyToPlay => "canplaythrough",
        AudioEventKind::Error => "error",
        AudioEventKind::Finished => "ended",
        AudioEventKind::TimeAdvanced => "timeupdate",
    }
}

/// Audio primitive backed by a detached `<audio>` element
///
/// DOM events are not handled in place: each listener pushes an
/// [`AudioNotification`] into the shared [`Inbox`] and runs the wake
/// callback, which feeds the controller once it is free.
pub struct HtmlAudio {
    element: HtmlAudioElement,
    closures: HashMap<u64, (AudioEventKind, Closure<dyn FnMut(Event)>)>,
    kinds: Kinds,
    inbox: Inbox,
    wake: Wake,
    next_id: u64,
}

impl HtmlAudio {
    /// Create a primitive around a fresh `<audio>` element
    ///
    /// # Errors
    /// Fails outside a document context.
    pub fn new(inbox: Inbox, wake: Wake) -> Result<Self, JsValue> {
        Ok(Self {
            element: HtmlAudioElement::new()?,
            closures: HashMap::new(),
            kinds: Rc::new(RefCell::new(HashMap::new())),
            inbox,
            wake,
            next_id: 0,
        })
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }

    fn media_error_message(element: &HtmlAudioElement) -> String {
        element.error().map_or_else(
            || "unknown media error".to_string(),
            |e| format!("media error code {}", e.code()),
        )
    }
}

fn deliver(inbox: &Inbox, wake: &Wake, notification: AudioNotification) {
    inbox.borrow_mut().push_back(notification);
    if let Some(wake) = wake.borrow().as_ref() {
        wake();
    }
}

impl AudioPrimitive for HtmlAudio {
    fn set_source(&mut self, url: &str) {
        self.element.set_src(url);
    }

    fn load(&mut self) {
        self.element.load();
    }

    fn play(&mut self) -> Result<(), AudioError> {
        let promise = self
            .element
            .play()
            .map_err(|e| AudioError::PlayRejected(format!("{e:?}")))?;

        let kinds = Rc::clone(&self.kinds);
        let inbox = Rc::clone(&self.inbox);
        let wake = Rc::clone(&self.wake);
        wasm_bindgen_futures::spawn_local(async move {
            let Err(err) = JsFuture::from(promise).await else {
                return;
            };
            let name = js_sys::Reflect::get(&err, &JsValue::from_str("name"))
                .ok()
                .and_then(|n| n.as_string())
                .unwrap_or_default();
            // Interrupted by a newer load; that load reports its own outcome
            if name == "AbortError" {
                tracing::debug!("play() interrupted by a new load");
                return;
            }
            tracing::warn!(error = %name, "play() rejected");
            let listeners: Vec<u64> = kinds
                .borrow()
                .iter()
                .filter(|(_, kind)| **kind == AudioEventKind::Error)
                .map(|(id, _)| *id)
                .collect();
            for id in listeners {
                deliver(
                    &inbox,
                    &wake,
                    AudioNotification::new(
                        ListenerId::new(id),
                        AudioEvent::Error {
                            message: format!("play() rejected: {name}"),
                        },
                    ),
                );
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            tracing::warn!(error = ?e, "pause() failed");
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(f64::from(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn position_secs(&self) -> f64 {
        self.element.current_time()
    }

    fn add_listener(&mut self, kind: AudioEventKind) -> ListenerId {
        self.next_id += 1;
        let id = self.next_id;

        let inbox = Rc::clone(&self.inbox);
        let wake = Rc::clone(&self.wake);
        let element = self.element.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let event = match kind {
                AudioEventKind::ReadyToPlay => AudioEvent::ReadyToPlay,
                AudioEventKind::Error => AudioEvent::Error {
                    message: HtmlAudio::media_error_message(&element),
                },
                AudioEventKind::Finished => AudioEvent::Finished,
                AudioEventKind::TimeAdvanced => AudioEvent::TimeAdvanced,
            };
            deliver(&inbox, &wake, AudioNotification::new(ListenerId::new(id), event));
        });

        if let Err(e) = self
            .element
            .add_event_listener_with_callback(dom_event(kind), closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, event = dom_event(kind), "Failed to attach listener");
        }
        self.kinds.borrow_mut().insert(id, kind);
        self.closures.insert(id, (kind, closure));
        ListenerId::new(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.kinds.borrow_mut().remove(&id.get());
        if let Some((kind, closure)) = self.closures.remove(&id.get()) {
            if let Err(e) = self
                .element
                .remove_event_listener_with_callback(dom_event(kind), closure.as_ref().unchecked_ref())
            {
                tracing::warn!(error = ?e, "Failed to detach listener");
            }
        }
    }
}

impl Drop for HtmlAudio {
    fn drop(&mut self) {
        let ids: Vec<u64> = self.closures.keys().copied().collect();
        for id in ids {
            self.remove_listener(ListenerId::new(id));
        }
        if let Err(e) = self.element.pause() {
            tracing::debug!(error = ?e, "pause() on drop failed");
        }
    }
}
