//! Runtime configuration for the two lookups.
//!
//! Layering: built-in defaults → JSON file → `SUNPANEL_API_KEY`.
//! The file lives at `<config dir>/sun_panel/config.json` and every key in
//! it is optional. A missing file is not an error.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_SUN_TIMES_URL: &str = "https://sunrise-sunset-times.p.rapidapi.com/getSunTimes";
pub const DEFAULT_API_HOST: &str = "sunrise-sunset-times.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the RapidAPI key.
pub const API_KEY_ENV: &str = "SUNPANEL_API_KEY";

/// Endpoints, credentials and timeout handed to the collaborators at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding_url: String,
    pub sun_times_url: String,
    /// Sent as `x-rapidapi-key`.
    pub api_key: String,
    /// Sent as `x-rapidapi-host`.
    pub api_host: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.into(),
            sun_times_url: DEFAULT_SUN_TIMES_URL.into(),
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from the default path, then apply the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::load_from(&Self::default_path())?;
        Ok(config.with_api_key(std::env::var(API_KEY_ENV).ok()))
    }

    /// Load from a specific file. Keys absent from the file keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config = serde_json::from_str(&data)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sun_panel")
            .join("config.json")
    }

    /// Override the API key when a non-empty value is given.
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
