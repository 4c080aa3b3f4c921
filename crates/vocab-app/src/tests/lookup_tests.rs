use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::timeout;
use vocab_config::settings::Settings;
use vocab_core::KeyType;

use super::fakes::*;
use crate::events::lookup::run_lookup;
use crate::section::{DICTIONARY_ERROR, NO_VOCAB, SectionBody};
use crate::state::AppState;

async fn audio_contributors(state: &AppState) -> Vec<Vec<String>> {
    let section = state.section.lock().await;
    let SectionBody::Vocab(slots) = section.body() else {
        panic!("expected vocab, got {:?}", section.body());
    };
    slots
        .iter()
        .map(|slot| slot.audio.iter().map(|c| c.contributor.clone()).collect())
        .collect()
}

fn run_audio() -> Arc<FakeAudio> {
    Arc::new(
        FakeAudio::new()
            .with_response("走る", RUN_AUDIO)
            .with_response("競走", RACE_AUDIO),
    )
}

#[tokio::test]
async fn test_lookup_renders_entries_and_audio() {
    let audio = run_audio();
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(audio.clone()),
        settings_with_audio(),
    );

    let text = run_lookup(state.clone(), "走".into()).await.unwrap().unwrap();

    assert!(text.contains("走る [はしる]\nGodan verb, Intransitive verb\n1. to run\n2. to travel\n"));
    assert!(text.contains("競走 [きょうそう]\nNoun, Suru verb\nrace; contest\n"));
    assert!(text.contains("♪ https://audio00.forvo.com/mp3/run-skent (skent)"));
    assert!(text.contains("♪ https://audio00.forvo.com/mp3/race-poyotan (poyotan)"));
    assert!(text.contains("Pronunciations by Forvo"));
    assert_eq!(audio.calls(), 2);

    // Each word's clips land in its own slot regardless of completion order
    assert_eq!(
        audio_contributors(&state).await,
        vec![vec!["skent", "other"], vec!["poyotan"]]
    );
}

#[tokio::test]
async fn test_whitelist_filters_audio() {
    let settings = Settings {
        forvo_username_whitelist_csv: "skent".to_string(),
        ..settings_with_audio()
    };
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(run_audio()),
        settings,
    );

    run_lookup(state.clone(), "走".into()).await.unwrap().unwrap();

    assert_eq!(
        audio_contributors(&state).await,
        vec![vec!["skent".to_string()], vec![]]
    );
}

#[tokio::test]
async fn test_audio_failure_only_affects_its_word() {
    let audio = Arc::new(FakeAudio::new().with_response("競走", RACE_AUDIO));
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(audio),
        settings_with_audio(),
    );

    let text = run_lookup(state.clone(), "走".into()).await.unwrap().unwrap();

    assert!(text.contains("1. to run"));
    assert_eq!(
        audio_contributors(&state).await,
        vec![vec![], vec!["poyotan".to_string()]]
    );
}

#[tokio::test]
async fn test_malformed_audio_json_shows_no_audio() {
    let audio = Arc::new(
        FakeAudio::new()
            .with_response("走る", "{ not json")
            .with_response("競走", RACE_AUDIO),
    );
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(audio),
        settings_with_audio(),
    );

    run_lookup(state.clone(), "走".into()).await.unwrap().unwrap();

    assert_eq!(
        audio_contributors(&state).await,
        vec![vec![], vec!["poyotan".to_string()]]
    );
}

#[tokio::test]
async fn test_no_api_key_skips_audio() {
    let audio = run_audio();
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(audio.clone()),
        Settings::default(),
    );

    let text = run_lookup(state, "走".into()).await.unwrap().unwrap();

    assert_eq!(audio.calls(), 0);
    assert!(!text.contains("♪"));
    assert!(!text.contains("Pronunciations by Forvo"));
}

#[tokio::test]
async fn test_key_type_follows_settings() {
    let dictionary = FakeDictionary::new().with_response("走", RUN_RESPONSE);
    let requests = dictionary.requests();
    let state = test_state(dictionary, None, Settings::default());

    run_lookup(state.clone(), "走".into()).await.unwrap();

    state.config.write().await.settings.show_all_wwwjdic_vocab = true;
    run_lookup(state, "走".into()).await.unwrap();

    assert_eq!(
        *requests.lock().unwrap(),
        vec![
            ("走".to_string(), KeyType::CommonOnly),
            ("走".to_string(), KeyType::All),
        ]
    );
}

#[tokio::test]
async fn test_min_rating_reaches_audio_provider() {
    let audio = run_audio();
    let settings = Settings {
        forvo_min_rating: 3,
        ..settings_with_audio()
    };
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(audio.clone()),
        settings,
    );

    run_lookup(state, "走".into()).await.unwrap();

    assert_eq!(audio.ratings(), vec![3, 3]);
}

#[tokio::test]
async fn test_dictionary_failure_shows_error() {
    let state = test_state(FakeDictionary::failing(), None, Settings::default());

    let text = run_lookup(state, "走".into()).await.unwrap().unwrap();
    assert!(text.contains(DICTIONARY_ERROR));
}

#[tokio::test]
async fn test_truncated_response_shows_error() {
    let state = test_state(
        FakeDictionary::new().with_response("走", "<pre>\n走る [はしる] /(v5r) to run/"),
        None,
        Settings::default(),
    );

    let text = run_lookup(state, "走".into()).await.unwrap().unwrap();
    assert!(text.contains(DICTIONARY_ERROR));
}

#[tokio::test]
async fn test_no_matches() {
    let state = test_state(FakeDictionary::new(), None, Settings::default());

    let text = run_lookup(state, "鬱".into()).await.unwrap().unwrap();
    assert!(text.contains(NO_VOCAB));
}

#[tokio::test]
async fn test_blank_kanji_is_ignored() {
    let state = test_state(FakeDictionary::new(), None, Settings::default());

    assert_eq!(run_lookup(state.clone(), "  \n".into()).await.unwrap(), None);
    assert_eq!(state.section.lock().await.kanji(), None);
}

#[tokio::test]
async fn test_repeated_lookup_is_identical() {
    let settings = Settings {
        forvo_username_whitelist_csv: "skent,poyotan".to_string(),
        ..settings_with_audio()
    };
    let state = test_state(
        FakeDictionary::new().with_response("走", RUN_RESPONSE),
        Some(run_audio()),
        settings,
    );

    let first = run_lookup(state.clone(), "走".into()).await.unwrap();
    let second = run_lookup(state.clone(), "走".into()).await.unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_superseded_lookup_is_discarded() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let dictionary = FakeDictionary::new()
        .with_response("走", RUN_RESPONSE)
        .with_response("水", WATER_RESPONSE)
        .with_gate(
            "走",
            Gate {
                entered: entered.clone(),
                release: release.clone(),
            },
        );
    let state = test_state(dictionary, None, Settings::default());

    let slow = tokio::spawn(run_lookup(state.clone(), "走".into()));
    timeout(Duration::from_secs(2), entered.notified())
        .await
        .expect("slow lookup never reached the dictionary");

    let fast = run_lookup(state.clone(), "水".into()).await.unwrap().unwrap();
    assert!(fast.contains("水 [みず]"));

    release.notify_one();
    let stale = timeout(Duration::from_secs(2), slow)
        .await
        .expect("slow lookup never finished")
        .unwrap()
        .unwrap();
    assert_eq!(stale, None);

    let section = state.section.lock().await;
    assert_eq!(section.kanji(), Some("水"));
    let SectionBody::Vocab(slots) = section.body() else {
        panic!("expected vocab");
    };
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].entry.headword(), "水");
}
