/// Player configuration
use crate::error::{PlayerError, Result};
use mango_catalog_client::{CatalogConfig, DEFAULT_TABLE};
use mango_playback::{PlaybackConfig, DEFAULT_VOLUME};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path, time::Duration};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_NAME: &str = "mango";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default)]
    pub order_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f32,

    #[serde(default)]
    pub skip_on_error: bool,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Background image URLs cycled with `[` and `]`
    #[serde(default)]
    pub backgrounds: Vec<String>,
}

impl PlayerConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `mango.toml` in the working
    /// directory is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load), reading variables from `env` instead of the
    /// process environment when it is `Some`
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file
        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        // Override with environment variables (MANGO_CATALOG__API_KEY, ...)
        settings = settings.add_source(
            config::Environment::with_prefix("MANGO")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("display.backgrounds")
                .try_parsing(true)
                .source(env),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.url.trim().is_empty() {
            return Err(PlayerError::Config(
                "catalog URL is required (set MANGO_CATALOG__URL)".to_string(),
            ));
        }

        let volume = self.playback.initial_volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(PlayerError::Config(format!(
                "initial volume must be between 0 and 1, got {volume}"
            )));
        }

        if self.playback.tick_interval_ms == 0 {
            return Err(PlayerError::Config(
                "tick interval must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            url: self.catalog.url.clone(),
            api_key: self.catalog.api_key.clone(),
            table: self.catalog.table.clone(),
            order_by: self.catalog.order_by.clone(),
        }
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            initial_volume: self.playback.initial_volume,
            skip_on_error: self.playback.skip_on_error,
            ..PlaybackConfig::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.playback.tick_interval_ms)
    }
}

// Default values
fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_initial_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_tick_interval_ms() -> u64 {
    250
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            order_by: None,
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            skip_on_error: false,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}
