//! Configuration resolution for the Dusk Sky client.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.dusksky/settings.json)
//! 3. Environment variables
//! 4. CLI arguments (highest priority, applied by the binary)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Complete Dusk Sky client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API gateway fronting the platform microservices.
    pub base_url: String,
    /// Path of the durable token copy. `None` means the default location
    /// (`~/.dusksky/token`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_path: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            token_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path to the config directory: `~/.dusksky/`.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".dusksky"))
    }

    /// Path to the global config file: `~/.dusksky/settings.json`.
    pub fn global_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("settings.json"))
    }
}

/// Load configuration with hierarchical resolution.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    if let Some(global_path) = Config::global_path() {
        if global_path.exists() {
            let global = load_config_file(&global_path)?;
            merge_config(&mut config, global);
        }
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

fn merge_config(base: &mut Config, overlay: Config) {
    base.base_url = overlay.base_url;
    if overlay.token_path.is_some() {
        base.token_path = overlay.token_path;
    }
    base.log_level = overlay.log_level;
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(val) = std::env::var("DUSKSKY_BASE_URL") {
        config.base_url = val;
    }
    if let Ok(val) = std::env::var("DUSKSKY_TOKEN_PATH") {
        config.token_path = Some(PathBuf::from(val));
    }
    if let Ok(val) = std::env::var("DUSKSKY_LOG_LEVEL") {
        config.log_level = val;
    }
}
