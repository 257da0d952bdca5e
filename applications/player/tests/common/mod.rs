//! Common test utilities and fixtures
#![allow(dead_code)]

use mango_core::{Track, TrackId};
use mango_player::{Backdrop, Session};
use mango_playback::PlaybackConfig;
use std::time::Duration;

pub const TICK: Duration = Duration::from_millis(250);

pub fn track(id: i64, title: &str, secs: f64) -> Track {
    Track::new(
        TrackId::new(id),
        title,
        format!("https://cdn.example.com/songs/{id}.mp3"),
    )
    .with_artist("The Mangoes")
    .with_album("Ripe")
    .with_duration_seconds(secs)
}

/// `n` two-second songs titled "Song 1".."Song n"
pub fn short_tracks(n: i64) -> Vec<Track> {
    (1..=n).map(|i| track(i, &format!("Song {i}"), 2.0)).collect()
}

pub fn session(config: PlaybackConfig) -> Session<Vec<u8>> {
    Session::new(
        config,
        TICK,
        Backdrop::new(vec![
            "https://img.example.com/a.jpg".to_string(),
            "https://img.example.com/b.jpg".to_string(),
        ]),
        Vec::new(),
    )
}

pub async fn session_with(tracks: Vec<Track>) -> Session<Vec<u8>> {
    let mut session = session(PlaybackConfig::default());
    session.load_playlist(&tracks).await;
    session
}

pub fn output(session: &Session<Vec<u8>>) -> String {
    String::from_utf8_lossy(session.view().writer()).into_owned()
}
