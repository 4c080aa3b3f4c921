use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use vocab_config::Config;

use crate::state::{AppState, Providers};

const SETTINGS_ENV: &str = "VOCAB_BEYOND_SETTINGS";

/// Settings file from the command line, falling back to the environment
pub fn settings_path(cli: Option<PathBuf>) -> Option<PathBuf> {
    cli.or_else(|| env::var_os(SETTINGS_ENV).map(PathBuf::from))
}

/// Load config from the settings file, or defaults when there is none
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => {
            tracing::info!("No settings file given, using defaults");
            Ok(Config::new())
        }
    }
}

/// Re-read settings and rebuild providers. Keeps the old settings if the
/// file cannot be read.
pub async fn reload(state: &AppState) -> anyhow::Result<()> {
    let config = load_config(state.settings_path.as_deref())?;
    let providers = Providers::from_config(&config);

    *state.providers.write().await = providers;
    *state.config.write().await = config;

    tracing::info!("Settings reloaded");
    Ok(())
}
