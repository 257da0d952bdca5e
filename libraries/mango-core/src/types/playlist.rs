/// Playlist domain type
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Ordered collection of tracks for the current session
///
/// Insertion order is fetch order. A playlist is read-only once populated;
/// refreshing the session replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get the track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over tracks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Index reached by moving `offset` positions from `from`, wrapping both ways
    ///
    /// Uses Euclidean remainder so the result is never negative: stepping
    /// back from 0 lands on the last track. `from` itself is reduced modulo
    /// the length first. Returns `None` for an empty playlist.
    pub fn step(&self, from: usize, offset: isize) -> Option<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        let len = len as i128;
        let target = (from as i128 % len + offset as i128).rem_euclid(len);
        Some(target as usize)
    }

    /// Reduce an arbitrary index into range
    pub fn wrap(&self, index: usize) -> Option<usize> {
        self.step(index, 0)
    }
}

impl From<Vec<Track>> for Playlist {
    fn from(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrackId;

    fn playlist(n: i64) -> Playlist {
        (0..n)
            .map(|i| Track::new(TrackId::new(i), format!("Track {i}"), format!("https://cdn/{i}.mp3")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn step_wraps_forward() {
        let p = playlist(3);
        assert_eq!(p.step(0, 1), Some(1));
        assert_eq!(p.step(2, 1), Some(0));
    }

    #[test]
    fn step_wraps_backward_without_going_negative() {
        let p = playlist(3);
        assert_eq!(p.step(0, -1), Some(2));
        assert_eq!(p.step(1, -1), Some(0));
        assert_eq!(p.step(0, -4), Some(2));
    }

    #[test]
    fn step_on_empty_playlist_is_none() {
        let p = Playlist::new();
        assert_eq!(p.step(0, 1), None);
        assert_eq!(p.wrap(5), None);
    }

    #[test]
    fn wrap_reduces_out_of_range_index() {
        let p = playlist(4);
        assert_eq!(p.wrap(9), Some(1));
    }
}
