/// Core traits for Melodic Mango
use crate::error::Result;
use crate::types::Track;
use async_trait::async_trait;

/// Source of the session playlist
///
/// Implementers return every track in the order the backing store yields
/// them. The playback controller consumes a source once at start-up and
/// again whenever the playlist is refreshed.
///
/// The hosted catalog client is the production implementation; tests use
/// in-memory or mocked sources.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fetch the full ordered track list
    ///
    /// # Errors
    /// Returns an error if the source is unreachable or rejects the request
    async fn fetch_all(&self) -> Result<Vec<Track>>;
}

/// Fixed, in-memory playlist source
#[async_trait]
impl PlaylistSource for Vec<Track> {
    async fn fetch_all(&self) -> Result<Vec<Track>> {
        Ok(self.clone())
    }
}
