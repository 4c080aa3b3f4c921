use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::settings::Settings;

pub mod network;
pub mod settings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub settings: Settings,
    pub network: NetworkConfig,
}

impl Config {
    /// Defaults plus environment overrides, no settings file
    pub fn new() -> Self {
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);

        Config {
            settings,
            network: NetworkConfig::new(),
        }
    }

    /// Load host settings from a JSON file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = load_settings(path)?;
        apply_env_overrides(&mut settings);

        Ok(Config {
            settings,
            network: NetworkConfig::new(),
        })
    }
}

pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    tracing::info!("Loading settings from {}", path.display());
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(key) = env::var("FORVO_API_KEY") {
        tracing::debug!("Using Forvo API key from environment");
        settings.forvo_api_key = Some(key);
    }

    if let Some(rating) = env::var("FORVO_MIN_RATING")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        settings.forvo_min_rating = rating;
    }
}
