/// Catalog row shape
use crate::types::{Track, TrackId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A song row as stored in the catalog's `songs` table
///
/// This is the shape both the HTTP client and browser hosts receive. Every
/// column except `id` may be null.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SongRow {
    /// Primary key
    pub id: i64,
    /// Song title
    #[serde(default)]
    pub title: Option<String>,
    /// Artist name
    #[serde(default)]
    pub artist: Option<String>,
    /// Album name
    #[serde(default)]
    pub album: Option<String>,
    /// Genre
    #[serde(default)]
    pub genre: Option<String>,
    /// Length in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// ISO date, possibly with a time part
    #[serde(default)]
    pub release_date: Option<String>,
    /// Media URL
    #[serde(default)]
    pub file: Option<String>,
    /// Cover art URL
    #[serde(default)]
    pub picture: Option<String>,
}

impl SongRow {
    /// Parse `release_date`, ignoring any time part
    ///
    /// Missing or malformed dates yield `None`.
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

impl From<SongRow> for Track {
    fn from(row: SongRow) -> Self {
        let release_date = row.parsed_release_date();
        let duration_seconds = row
            .duration
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(0.0);

        Track {
            id: TrackId::new(row.id),
            title: row.title.unwrap_or_default(),
            artist: row.artist.unwrap_or_default(),
            album: row.album.unwrap_or_default(),
            genre: row.genre.unwrap_or_default(),
            duration_seconds,
            release_date,
            file_url: row.file.unwrap_or_default(),
            picture_url: row.picture.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(json: serde_json::Value) -> SongRow {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn full_row_maps_to_track() {
        let track: Track = row(serde_json::json!({
            "id": 3,
            "title": "Mango Tango",
            "artist": "The Mangoes",
            "album": "Ripe",
            "genre": "Latin",
            "duration": 181.5,
            "release_date": "2021-06-01",
            "file": "https://cdn.example.com/3.mp3",
            "picture": "https://cdn.example.com/3.jpg"
        }))
        .into();

        assert_eq!(track.id, TrackId::new(3));
        assert_eq!(track.title, "Mango Tango");
        assert_eq!(track.duration_seconds, 181.5);
        assert_eq!(track.release_date, NaiveDate::from_ymd_opt(2021, 6, 1));
        assert_eq!(track.file_url, "https://cdn.example.com/3.mp3");
        assert_eq!(track.picture_url, "https://cdn.example.com/3.jpg");
    }

    #[test]
    fn null_columns_default_to_empty() {
        let track: Track = row(serde_json::json!({
            "id": 9,
            "title": null,
            "duration": null,
            "release_date": null
        }))
        .into();

        assert_eq!(track.title, "");
        assert_eq!(track.artist, "");
        assert_eq!(track.duration_seconds, 0.0);
        assert!(track.release_date.is_none());
        assert_eq!(track.file_url, "");
    }

    #[test]
    fn timestamp_release_date_keeps_the_date() {
        let r = row(serde_json::json!({ "id": 1, "release_date": "2019-11-22T00:00:00+00:00" }));
        assert_eq!(r.parsed_release_date(), NaiveDate::from_ymd_opt(2019, 11, 22));
    }

    #[test]
    fn malformed_release_date_is_dropped() {
        let r = row(serde_json::json!({ "id": 1, "release_date": "sometime in 2020" }));
        assert!(r.parsed_release_date().is_none());
    }

    #[test]
    fn integer_duration_is_accepted() {
        let track: Track = row(serde_json::json!({ "id": 1, "duration": 240 })).into();
        assert_eq!(track.duration_seconds, 240.0);
    }

    #[test]
    fn raw_rows_build_a_playlist() {
        let rows: Vec<SongRow> = serde_json::from_str(
            r#"[
                {"id":1,"title":"A","artist":"X","album":"Y","genre":"Pop","duration":180,
                 "release_date":"2021-06-01","file":"https://x/a.mp3","picture":"https://x/a.jpg"},
                {"id":2,"title":"B","artist":null,"album":null,"genre":null,"duration":null,
                 "release_date":null,"file":"https://x/b.mp3","picture":null}
            ]"#,
        )
        .unwrap();

        let playlist = crate::types::Playlist::from(
            rows.into_iter().map(Track::from).collect::<Vec<_>>(),
        );
        assert_eq!(playlist.len(), 2);
        let first = playlist.get(0).unwrap();
        assert_eq!(first.duration_seconds, 180.0);
        assert_eq!(first.file_url, "https://x/a.mp3");
        assert_eq!(first.picture_url, "https://x/a.jpg");
        assert_eq!(playlist.get(1).unwrap().file_url, "https://x/b.mp3");
    }
}
