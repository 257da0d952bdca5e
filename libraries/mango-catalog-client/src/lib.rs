//! Melodic Mango Catalog Client
//!
//! HTTP client for the hosted song catalog (a PostgREST table).
//!
//! # Features
//!
//! - **Songs**: Fetch every row of the songs table, optionally ordered
//! - **Playlist source**: `CatalogClient` implements `mango_core::PlaylistSource`
//!
//! # Example
//!
//! ```ignore
//! use mango_catalog_client::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CatalogConfig::new("https://xyzcompany.supabase.co", "public-anon-key");
//!     let client = CatalogClient::new(config)?;
//!
//!     let tracks = client.fetch_tracks().await?;
//!     println!("Found {} songs", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogClientError, Result};
pub use mango_core::SongRow;
pub use types::{CatalogConfig, DEFAULT_TABLE};
