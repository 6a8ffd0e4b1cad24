use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::stats::DEFAULT_TREND_WINDOW;
use crate::store::DEFAULT_STORAGE_KEY;
use crate::utils;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file holding the persisted store
    #[serde(default = "default_storage_path")]
    pub storage_path: String,
    /// Key the store blob is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Log filter used when RUST_LOG is not set (e.g. "warn", "career_dashboard=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// How many entries the trend listings show
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
    #[serde(default = "default_config_version")]
    pub config_version: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            storage_key: default_storage_key(),
            log_level: default_log_level(),
            currency_symbol: default_currency_symbol(),
            trend_window: default_trend_window(),
            config_version: Some(CURRENT_CONFIG_VERSION),
        }
    }
}

// Default value functions
fn default_storage_path() -> String {
    // This is a fallback - actual profile will be determined at load time
    if let Some(data_dir) = utils::get_data_dir(utils::Profile::Prod) {
        data_dir.join("store.db").to_string_lossy().to_string()
    } else {
        "~/.local/share/career-dashboard/store.db".to_string()
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_trend_window() -> usize {
    DEFAULT_TREND_WINDOW
}

fn default_config_version() -> Option<u32> {
    Some(CURRENT_CONFIG_VERSION)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

impl Config {
    /// Load configuration from file, or create default if missing
    /// Uses the provided profile to determine config and storage paths
    pub fn load_with_profile(profile: utils::Profile) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        if config_path.exists() {
            let mut config = Self::load_from_path(&config_path)?;

            // A dev config that never set its own storage path must not point at prod data
            if profile == utils::Profile::Dev && config.storage_path == default_storage_path() {
                config.storage_path = Self::default_storage_path_for_profile(profile);
            }

            Ok(config)
        } else {
            // Create default config and save it
            let mut config = Config::default();
            config.storage_path = Self::default_storage_path_for_profile(profile);
            let save_result = config.save_to_path(&config_path);
            if let Err(ref e) = save_result {
                tracing::error!(path = ?config_path, error = %e, "failed to save config file");
            }
            save_result?;
            Ok(config)
        }
    }

    /// Load configuration from file, using production profile
    /// Use load_with_profile() to specify a different profile
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_profile(utils::Profile::Prod)
    }

    /// Load configuration from an explicit file (the `--config` option)
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the profile's config file
    pub fn save_with_profile(&mut self, profile: utils::Profile) -> Result<(), ConfigError> {
        let config_path = Self::get_config_path(profile)?;
        self.save_to_path(&config_path)
    }

    /// Save configuration to file, using production profile
    /// Use save_with_profile() to specify a different profile
    pub fn save(&mut self) -> Result<(), ConfigError> {
        self.save_with_profile(utils::Profile::Prod)
    }

    /// Save configuration to an explicit file
    pub fn save_to_path(&mut self, config_path: &Path) -> Result<(), ConfigError> {
        // Ensure config version is set before saving
        self.config_version = Some(CURRENT_CONFIG_VERSION);

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, toml_string).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile).ok_or_else(|| {
            ConfigError::ConfigDirError("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get default storage path for a specific profile
    fn default_storage_path_for_profile(profile: utils::Profile) -> String {
        if let Some(data_dir) = utils::get_data_dir(profile) {
            data_dir.join("store.db").to_string_lossy().to_string()
        } else {
            // Fallback paths - platform-specific
            #[cfg(target_os = "macos")]
            {
                match profile {
                    utils::Profile::Dev => {
                        "~/Library/Application Support/career-dashboard-dev/store.db".to_string()
                    }
                    utils::Profile::Prod => {
                        "~/Library/Application Support/career-dashboard/store.db".to_string()
                    }
                }
            }
            #[cfg(not(target_os = "macos"))]
            {
                match profile {
                    utils::Profile::Dev => "~/.local/share/career-dashboard-dev/store.db".to_string(),
                    utils::Profile::Prod => "~/.local/share/career-dashboard/store.db".to_string(),
                }
            }
        }
    }

    /// Get the expanded storage path (with ~ expansion)
    pub fn get_storage_path(&self) -> PathBuf {
        utils::expand_path(&self.storage_path)
    }
}
