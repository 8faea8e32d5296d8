//! Configuration management for Mediatheque

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, path::PathBuf};

use crate::library::LibraryPolicy;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON document holding the whole library
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibraryConfig {
    /// Decrement copies on borrow, increment on return
    pub track_copies: bool,
    /// Reject media whose reference is already catalogued
    pub unique_references: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (MEDIATHEQUE_LIBRARY__TRACK_COPIES=false)
            .add_source(
                Environment::with_prefix("MEDIATHEQUE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override the data file from MEDIATHEQUE_DATA_FILE if present
            .set_override_option("storage.path", env::var("MEDIATHEQUE_DATA_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl LibraryConfig {
    pub fn policy(&self) -> LibraryPolicy {
        LibraryPolicy {
            track_copies: self.track_copies,
            unique_references: self.unique_references,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/library.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let policy = LibraryPolicy::default();
        Self {
            track_copies: policy.track_copies,
            unique_references: policy.unique_references,
        }
    }
}
