use std::sync::Arc;

use tokio::task::JoinSet;
use vocab_audio::select_audio;
use vocab_config::settings::Settings;
use vocab_core::preprocess::{DefaultPreprocessor, Preprocessor};
use vocab_core::{AudioCandidate, AudioProvider, DictionaryLookup, FilterPolicy, Generation, KeyType};
use vocab_lang_japanese::wwwjdic;

use crate::section::{DICTIONARY_ERROR, NO_VOCAB};
use crate::state::AppState;

/// A lookup cycle that already owns the section
#[derive(Debug)]
pub struct Cycle {
    kanji: String,
    generation: Generation,
}

impl Cycle {
    pub fn kanji(&self) -> &str {
        &self.kanji
    }
}

/// Claim the section for `kanji`, superseding any cycle still running.
///
/// Returns `None` for an empty selection, leaving the section untouched.
pub async fn begin_lookup(state: &AppState, kanji: &str) -> Option<Cycle> {
    let kanji = DefaultPreprocessor.process(kanji);
    if kanji.is_empty() {
        tracing::error!("could not get kanji");
        return None;
    }

    let generation = state.section.lock().await.begin(&kanji);
    tracing::info!("Looking up {kanji}");
    Some(Cycle { kanji, generation })
}

/// Run one lookup cycle for `kanji`.
///
/// Returns the rendered section, or `None` when the kanji is empty or a
/// newer cycle took over the section before this one finished.
pub async fn run_lookup(state: Arc<AppState>, kanji: String) -> anyhow::Result<Option<String>> {
    match begin_lookup(&state, &kanji).await {
        Some(cycle) => finish_lookup(state, cycle).await,
        None => Ok(None),
    }
}

/// Fetch, parse and render for a cycle started by [`begin_lookup`]
pub async fn finish_lookup(state: Arc<AppState>, cycle: Cycle) -> anyhow::Result<Option<String>> {
    let Cycle { kanji, generation } = cycle;
    let settings = state.config.read().await.settings.clone();
    let providers = state.providers.read().await.clone();

    let key_type = KeyType::from_settings(&settings);
    let raw = match providers.dictionary.fetch(&kanji, key_type).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("{} request for {kanji} failed: {e}", providers.dictionary.name());
            return Ok(show_message(&state, generation, DICTIONARY_ERROR, &settings).await);
        }
    };

    let entries = match wwwjdic::parse(&raw, key_type) {
        Ok(DictionaryLookup::Matches(entries)) => entries,
        Ok(DictionaryLookup::NoMatches) => {
            return Ok(show_message(&state, generation, NO_VOCAB, &settings).await);
        }
        Err(e) => {
            tracing::error!("Unreadable {} response for {kanji}: {e}", providers.dictionary.name());
            return Ok(show_message(&state, generation, DICTIONARY_ERROR, &settings).await);
        }
    };

    let headwords: Vec<String> = entries.iter().map(|e| e.headword().to_string()).collect();
    if !state.section.lock().await.show_entries(generation, entries) {
        tracing::debug!("Lookup for {kanji} superseded before rendering");
        return Ok(None);
    }

    // Built once per cycle, before any audio request goes out
    let policy = FilterPolicy::from_settings(&settings);

    if let Some(audio) = providers.audio.filter(|_| settings.audio_enabled()) {
        let mut tasks = JoinSet::new();
        for (index, headword) in headwords.into_iter().enumerate() {
            tasks.spawn(fetch_audio(audio.clone(), index, headword, policy.clone()));
        }

        while let Some(result) = tasks.join_next().await {
            match result {
                Ok((index, candidates)) => {
                    let mut section = state.section.lock().await;
                    if !section.attach_audio(generation, index, candidates) {
                        tracing::debug!("Discarding audio for superseded lookup of {kanji}");
                    }
                }
                Err(e) => tracing::error!("audio task panicked: {e}"),
            }
        }
    }

    Ok(render_if_current(&state, generation, &settings).await)
}

/// Audio for one entry. Every failure degrades to no audio for that entry.
async fn fetch_audio(
    audio: Arc<dyn AudioProvider>,
    index: usize,
    headword: String,
    policy: FilterPolicy,
) -> (usize, Vec<AudioCandidate>) {
    let raw = match audio.pronunciations(&headword, policy.minimum_rating).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("{} API error for {headword}: {e}", audio.name());
            return (index, Vec::new());
        }
    };

    let candidates = select_audio(&raw, &policy).unwrap_or_else(|e| {
        tracing::warn!("No audio for {headword}: {e}");
        Vec::new()
    });

    tracing::debug!("{} clips for {headword}", candidates.len());
    (index, candidates)
}

async fn show_message(
    state: &AppState,
    generation: Generation,
    message: &'static str,
    settings: &Settings,
) -> Option<String> {
    let mut section = state.section.lock().await;
    if section.show_message(generation, message) {
        Some(section.render(settings))
    } else {
        None
    }
}

async fn render_if_current(
    state: &AppState,
    generation: Generation,
    settings: &Settings,
) -> Option<String> {
    let section = state.section.lock().await;
    if section.is_current(generation) {
        Some(section.render(settings))
    } else {
        None
    }
}
