//! Listener subscriptions held on the audio primitive
//!
//! Every listener the controller registers goes through [`Subscriptions`],
//! which remembers whether it is one-shot or repeating and guarantees it is
//! unregistered exactly once: at first firing for one-shots, on explicit
//! release, or on teardown.

use crate::audio::{AudioEventKind, AudioPrimitive, ListenerId};

/// How long a subscription stays registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Released at its first firing
    OneShot,
    /// Stays until explicitly released
    Repeating,
}

/// A live listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub id: ListenerId,
    pub kind: AudioEventKind,
    pub lifetime: Lifetime,
}

/// Registry of live listener registrations
#[derive(Debug, Default)]
pub struct Subscriptions {
    active: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on `audio` and track it
    pub fn acquire<A: AudioPrimitive + ?Sized>(
        &mut self,
        audio: &mut A,
        kind: AudioEventKind,
        lifetime: Lifetime,
    ) -> ListenerId {
        let id = audio.add_listener(kind);
        self.active.push(Subscription { id, kind, lifetime });
        id
    }

    /// Unregister one listener; returns false if it was not live
    pub fn release<A: AudioPrimitive + ?Sized>(&mut self, audio: &mut A, id: ListenerId) -> bool {
        match self.active.iter().position(|s| s.id == id) {
            Some(pos) => {
                self.active.swap_remove(pos);
                audio.remove_listener(id);
                true
            }
            None => false,
        }
    }

    /// Unregister every listener of `kind`
    pub fn release_kind<A: AudioPrimitive + ?Sized>(&mut self, audio: &mut A, kind: AudioEventKind) {
        self.release_where(audio, |s| s.kind == kind);
    }

    /// Unregister every one-shot listener
    pub fn release_one_shots<A: AudioPrimitive + ?Sized>(&mut self, audio: &mut A) {
        self.release_where(audio, |s| s.lifetime == Lifetime::OneShot);
    }

    /// Unregister everything
    pub fn release_all<A: AudioPrimitive + ?Sized>(&mut self, audio: &mut A) {
        self.release_where(audio, |_| true);
    }

    /// Look up the subscription a notification was addressed to
    ///
    /// Returns `None` for stale ids (already released or never registered).
    /// A one-shot subscription is released before it is returned, so it can
    /// never fire twice.
    pub fn claim<A: AudioPrimitive + ?Sized>(
        &mut self,
        audio: &mut A,
        id: ListenerId,
    ) -> Option<Subscription> {
        let sub = *self.active.iter().find(|s| s.id == id)?;
        if sub.lifetime == Lifetime::OneShot {
            self.release(audio, id);
        }
        Some(sub)
    }

    /// Number of live subscriptions of `kind`
    pub fn count(&self, kind: AudioEventKind) -> usize {
        self.active.iter().filter(|s| s.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn release_where<A, F>(&mut self, audio: &mut A, mut pred: F)
    where
        A: AudioPrimitive + ?Sized,
        F: FnMut(&Subscription) -> bool,
    {
        let mut kept = Vec::with_capacity(self.active.len());
        for sub in self.active.drain(..) {
            if pred(&sub) {
                audio.remove_listener(sub.id);
            } else {
                kept.push(sub);
            }
        }
        self.active = kept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingAudio;

    #[test]
    fn one_shot_is_released_on_first_claim() {
        let mut audio = RecordingAudio::default();
        let mut subs = Subscriptions::new();

        let id = subs.acquire(&mut audio, AudioEventKind::ReadyToPlay, Lifetime::OneShot);
        assert_eq!(audio.count(AudioEventKind::ReadyToPlay), 1);

        let claimed = subs.claim(&mut audio, id).expect("live subscription");
        assert_eq!(claimed.kind, AudioEventKind::ReadyToPlay);
        assert_eq!(audio.count(AudioEventKind::ReadyToPlay), 0);

        // Second firing of the same id is stale
        assert!(subs.claim(&mut audio, id).is_none());
    }

    #[test]
    fn repeating_survives_claims() {
        let mut audio = RecordingAudio::default();
        let mut subs = Subscriptions::new();

        let id = subs.acquire(&mut audio, AudioEventKind::TimeAdvanced, Lifetime::Repeating);
        for _ in 0..3 {
            assert!(subs.claim(&mut audio, id).is_some());
        }
        assert_eq!(audio.count(AudioEventKind::TimeAdvanced), 1);
    }

    #[test]
    fn release_one_shots_keeps_repeating() {
        let mut audio = RecordingAudio::default();
        let mut subs = Subscriptions::new();

        subs.acquire(&mut audio, AudioEventKind::Finished, Lifetime::Repeating);
        subs.acquire(&mut audio, AudioEventKind::ReadyToPlay, Lifetime::OneShot);
        subs.acquire(&mut audio, AudioEventKind::Error, Lifetime::OneShot);

        subs.release_one_shots(&mut audio);

        assert_eq!(subs.len(), 1);
        assert_eq!(audio.listeners.len(), 1);
        assert_eq!(audio.count(AudioEventKind::Finished), 1);
    }

    #[test]
    fn release_all_unregisters_everything() {
        let mut audio = RecordingAudio::default();
        let mut subs = Subscriptions::new();

        subs.acquire(&mut audio, AudioEventKind::Finished, Lifetime::Repeating);
        subs.acquire(&mut audio, AudioEventKind::TimeAdvanced, Lifetime::Repeating);
        subs.acquire(&mut audio, AudioEventKind::Error, Lifetime::OneShot);

        subs.release_all(&mut audio);
        assert!(subs.is_empty());
        assert!(audio.listeners.is_empty());
    }

    #[test]
    fn releasing_unknown_id_is_a_no_op() {
        let mut audio = RecordingAudio::default();
        let mut subs = Subscriptions::new();
        assert!(!subs.release(&mut audio, ListenerId::new(99)));
    }
}
