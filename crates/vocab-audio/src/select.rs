use serde::Deserialize;
use serde_json::Value;
use vocab_core::{AudioCandidate, FilterPolicy, ParseError};

#[derive(Debug, Deserialize)]
struct ForvoItem {
    #[serde(default)]
    pathmp3: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

/// Pick the playable pronunciations out of a Forvo `word-pronunciations`
/// response.
///
/// Provider order is kept as-is. Items without an mp3 path or a username
/// are skipped, and a non-empty whitelist in `policy` drops everyone not on
/// it. A payload without items is simply empty.
pub fn select_audio(raw: &str, policy: &FilterPolicy) -> Result<Vec<AudioCandidate>, ParseError> {
    let payload: Value = serde_json::from_str(raw).inspect_err(|e| {
        tracing::error!("Forvo JSON parse error: {e}, raw response: {raw:?}");
    })?;

    // Forvo reports errors such as exhausted quotas as a bare JSON array
    let Some(object) = payload.as_object() else {
        tracing::warn!("Unexpected Forvo payload: {raw}");
        return Ok(Vec::new());
    };

    let Some(items) = object.get("items").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(|item| candidate(item, policy))
        .collect())
}

fn candidate(item: &Value, policy: &FilterPolicy) -> Option<AudioCandidate> {
    let item: ForvoItem = match serde_json::from_value(item.clone()) {
        Ok(item) => item,
        Err(e) => {
            tracing::warn!("Skipping unreadable Forvo item {item}: {e}");
            return None;
        }
    };

    let Some(source_url) = item.pathmp3.filter(|p| !p.is_empty()) else {
        tracing::warn!("Skipping Forvo item without pathmp3");
        return None;
    };

    let Some(contributor) = item.username.filter(|u| !u.is_empty()) else {
        tracing::warn!("Skipping Forvo item without username: {source_url}");
        return None;
    };

    if !policy.allows(&contributor) {
        tracing::info!("Skipping pronunciation from {contributor}");
        return None;
    }

    Some(AudioCandidate {
        source_url,
        contributor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "attributes": { "total": 3 },
        "items": [
            { "id": 1, "word": "走る", "username": "skent", "rate": 4, "pathmp3": "https://audio00.forvo.com/mp3/1" },
            { "id": 2, "word": "走る", "username": "other", "rate": 2, "pathmp3": "https://audio00.forvo.com/mp3/2" },
            { "id": 3, "word": "走る", "username": "poyotan", "rate": 1, "pathmp3": "https://audio00.forvo.com/mp3/3" }
        ]
    }"#;

    fn contributors(candidates: &[AudioCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.contributor.as_str()).collect()
    }

    #[test]
    fn test_empty_whitelist_keeps_order() {
        let candidates = select_audio(RESPONSE, &FilterPolicy::default()).unwrap();
        assert_eq!(contributors(&candidates), vec!["skent", "other", "poyotan"]);
        assert_eq!(candidates[0].source_url, "https://audio00.forvo.com/mp3/1");
    }

    #[test]
    fn test_whitelist_filters_contributors() {
        let raw = r#"{ "items": [
            { "username": "skent", "pathmp3": "https://audio00.forvo.com/mp3/1" },
            { "username": "other", "pathmp3": "https://audio00.forvo.com/mp3/2" }
        ] }"#;
        let policy = FilterPolicy::new(0, ["skent"]);

        let candidates = select_audio(raw, &policy).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].contributor, "skent");
    }

    #[test]
    fn test_whitelist_keeps_provider_order() {
        let policy = FilterPolicy::new(0, ["poyotan", "skent"]);
        let candidates = select_audio(RESPONSE, &policy).unwrap();
        assert_eq!(contributors(&candidates), vec!["skent", "poyotan"]);
    }

    #[test]
    fn test_incomplete_items_are_skipped() {
        let raw = r#"{ "items": [
            { "username": "skent" },
            { "pathmp3": "https://audio00.forvo.com/mp3/2" },
            { "username": "", "pathmp3": "https://audio00.forvo.com/mp3/3" },
            { "username": null, "pathmp3": "https://audio00.forvo.com/mp3/4" },
            { "username": 7, "pathmp3": "https://audio00.forvo.com/mp3/5" },
            { "username": "poyotan", "pathmp3": "https://audio00.forvo.com/mp3/6" }
        ] }"#;

        let candidates = select_audio(raw, &FilterPolicy::default()).unwrap();
        assert_eq!(contributors(&candidates), vec!["poyotan"]);
    }

    #[test]
    fn test_missing_or_empty_items() {
        let policy = FilterPolicy::default();
        assert!(select_audio("{}", &policy).unwrap().is_empty());
        assert!(select_audio(r#"{ "items": [] }"#, &policy).unwrap().is_empty());
        assert!(select_audio(r#"{ "items": null }"#, &policy).unwrap().is_empty());
    }

    #[test]
    fn test_error_array_payload_is_empty() {
        let raw = r#"["Limit/day reached."]"#;
        assert!(select_audio(raw, &FilterPolicy::default()).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let result = select_audio("{ \"items\": [", &FilterPolicy::default());
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }
}
