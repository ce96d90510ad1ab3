//! `roster.ron` loading with environment overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use roster_engine::{StoreSettings, DEFAULT_COLLECTION_PATH};
use roster_logging::parse_level;
use serde::Deserialize;
use thiserror::Error;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "roster.ron";
pub const API_URL_ENV: &str = "ROSTER_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub collection_path: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let store = StoreSettings::default();
        Self {
            api_url: store.base_url,
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            request_timeout_secs: store.request_timeout.as_secs(),
            log_level: "info".to_string(),
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    /// Reads `roster.ron` from the working directory, then applies the environment.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config = Self::load(Path::new(CONFIG_FILENAME))?;
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Reads the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Configured level, or `Info` when the name is not recognised.
    pub fn log_level(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            base_url: self.api_url.clone(),
            collection_path: self.collection_path.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            ..StoreSettings::default()
        }
    }
}
