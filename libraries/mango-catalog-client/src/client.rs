//! Catalog client.

use crate::error::{CatalogClientError, Result};
use crate::types::CatalogConfig;
use async_trait::async_trait;
use mango_core::{PlaylistSource, SongRow, Track};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for the hosted song catalog.
///
/// Reads the songs table through the PostgREST endpoint
/// (`{url}/rest/v1/{table}`) with the project's public API key.
///
/// # Example
///
/// ```ignore
/// use mango_catalog_client::{CatalogClient, CatalogConfig};
///
/// let config = CatalogConfig::new("https://xyzcompany.supabase.co", "public-anon-key")
///     .with_order_by("id.asc");
/// let client = CatalogClient::new(config)?;
///
/// let songs = client.fetch_songs().await?;
/// println!("Found {} songs", songs.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        // Validate URL
        if config.url.trim().is_empty() {
            return Err(CatalogClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim().trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url)?;

        if config.table.trim().is_empty() {
            return Err(CatalogClientError::InvalidUrl("table cannot be empty".into()));
        }

        let normalized_config = CatalogConfig { url, ..config };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("MelodicMango/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogClientError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the normalized catalog URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// URL of the songs query, `select=*` plus the optional order clause.
    pub fn songs_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/rest/v1/{}", self.config.url, self.config.table))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            if let Some(order) = self.config.order_by.as_deref() {
                query.append_pair("order", order);
            }
        }
        Ok(url)
    }

    /// Fetch every row of the songs table.
    pub async fn fetch_songs(&self) -> Result<Vec<SongRow>> {
        let url = self.songs_url()?;
        debug!(url = %url, table = %self.config.table, "Fetching songs");

        let response = self
            .http
            .get(url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    CatalogClientError::ServerUnreachable(e.to_string())
                } else {
                    CatalogClientError::Request(e)
                }
            })?;

        let response = check_status(response).await?;

        let songs: Vec<SongRow> = response.json().await.map_err(|e| {
            CatalogClientError::ParseError(format!("Failed to parse songs response: {e}"))
        })?;

        info!(songs = songs.len(), "Fetched songs");
        Ok(songs)
    }

    /// Fetch the songs table as playable tracks, in catalog order.
    pub async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        let songs = self.fetch_songs().await?;
        Ok(songs.into_iter().map(Track::from).collect())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(CatalogClientError::AuthFailed(error_text))
        }
        _ => Err(CatalogClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        }),
    }
}

#[async_trait]
impl PlaylistSource for CatalogClient {
    async fn fetch_all(&self) -> mango_core::Result<Vec<Track>> {
        Ok(self.fetch_tracks().await?)
    }
}
