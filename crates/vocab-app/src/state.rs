use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use vocab_audio::ForvoClient;
use vocab_config::Config;
use vocab_core::{AudioProvider, DictionaryProvider};
use vocab_lang_japanese::WwwjdicClient;

use crate::section::Section;

/// Outbound collaborators, rebuilt whenever settings change
#[derive(Clone)]
pub struct Providers {
    pub dictionary: Arc<dyn DictionaryProvider>,
    /// `None` when no Forvo API key is configured
    pub audio: Option<Arc<dyn AudioProvider>>,
}

impl Providers {
    pub fn from_config(config: &Config) -> Self {
        let dictionary: Arc<dyn DictionaryProvider> =
            Arc::new(WwwjdicClient::new(config.network.wwwjdic_url.clone()));

        let audio = config.settings.forvo_api_key().map(|key| {
            Arc::new(ForvoClient::new(
                config.network.forvo_url.clone(),
                key.to_string(),
                config.network.forvo_country.clone(),
            )) as Arc<dyn AudioProvider>
        });

        if audio.is_none() {
            tracing::info!("No Forvo API key configured, audio disabled");
        }

        Self { dictionary, audio }
    }
}

pub struct AppState {
    pub config: RwLock<Config>,
    pub providers: RwLock<Providers>,
    pub section: Mutex<Section>,
    /// Settings file to re-read on reload, if any
    pub settings_path: Option<PathBuf>,
}

impl AppState {
    pub fn new(config: Config, settings_path: Option<PathBuf>) -> Self {
        let providers = Providers::from_config(&config);
        Self::with_providers(config, providers, settings_path)
    }

    pub fn with_providers(
        config: Config,
        providers: Providers,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            config: RwLock::new(config),
            providers: RwLock::new(providers),
            section: Mutex::new(Section::new()),
            settings_path,
        }
    }
}
