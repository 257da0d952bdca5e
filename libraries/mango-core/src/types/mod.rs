mod ids;
mod playlist;
mod song_row;
mod track;

pub use ids::TrackId;
pub use playlist::Playlist;
pub use song_row::SongRow;
pub use track::Track;
