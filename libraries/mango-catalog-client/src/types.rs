//! Types for catalog requests and responses.

use serde::{Deserialize, Serialize};

/// Table read when none is configured.
pub const DEFAULT_TABLE: &str = "songs";

/// Configuration for connecting to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Project base URL (e.g., "https://xyzcompany.supabase.co")
    pub url: String,
    /// Public API key, sent as `apikey` and as the bearer token
    pub api_key: String,
    /// Table holding one row per song
    #[serde(default = "default_table")]
    pub table: String,
    /// PostgREST order clause (e.g., "id.asc"); rows come in storage order when unset
    #[serde(default)]
    pub order_by: Option<String>,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

impl CatalogConfig {
    /// Create a config for the default table.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: default_table(),
            order_by: None,
        }
    }

    /// Read from another table.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Ask the catalog to order rows.
    #[must_use]
    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }
}
