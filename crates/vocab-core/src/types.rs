use std::collections::HashSet;

use vocab_config::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A new kanji is on screen and should be looked up
    KanjiSelected(String),
    /// Settings changed on disk, re-read them and refresh the section
    ReloadSettings,
    /// Rendered section text for the output loop
    ShowSection(String),
    Shutdown,
}

/// Which vocabulary the dictionary is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyType {
    #[default]
    CommonOnly,
    All,
}

impl KeyType {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.show_all_wwwjdic_vocab {
            KeyType::All
        } else {
            KeyType::CommonOnly
        }
    }

    /// WWWJDIC key-type letter
    pub fn code(&self) -> char {
        match self {
            KeyType::CommonOnly => 'P',
            KeyType::All => 'J',
        }
    }
}

/// One parsed dictionary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    headword: String,
    japanese: String,
    parts_of_speech: Vec<String>,
    definitions: Vec<String>,
}

impl VocabularyEntry {
    /// Returns `None` when the headword is empty or there are no definitions
    pub fn new(
        headword: impl Into<String>,
        japanese: impl Into<String>,
        parts_of_speech: Vec<String>,
        definitions: Vec<String>,
    ) -> Option<Self> {
        let headword = headword.into();
        if headword.is_empty() || definitions.is_empty() {
            return None;
        }

        Some(Self {
            headword,
            japanese: japanese.into(),
            parts_of_speech,
            definitions,
        })
    }

    /// Canonical written form, used as the audio query key
    pub fn headword(&self) -> &str {
        &self.headword
    }

    /// Full Japanese segment including reading annotations
    pub fn japanese(&self) -> &str {
        &self.japanese
    }

    pub fn parts_of_speech(&self) -> &[String] {
        &self.parts_of_speech
    }

    pub fn parts_of_speech_label(&self) -> String {
        self.parts_of_speech.join(", ")
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryLookup {
    Matches(Vec<VocabularyEntry>),
    NoMatches,
}

impl DictionaryLookup {
    pub fn entries(&self) -> &[VocabularyEntry] {
        match self {
            DictionaryLookup::Matches(entries) => entries,
            DictionaryLookup::NoMatches => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCandidate {
    pub source_url: String,
    pub contributor: String,
}

/// Per-lookup audio filter, built fresh from settings at the start of each
/// cycle and passed down by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    pub minimum_rating: i64,
    /// Empty set allows every contributor
    pub allowed_contributors: HashSet<String>,
}

impl FilterPolicy {
    pub fn new<I, S>(minimum_rating: i64, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            minimum_rating,
            allowed_contributors: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.forvo_min_rating, settings.username_whitelist())
    }

    pub fn allows(&self, contributor: &str) -> bool {
        self.allowed_contributors.is_empty() || self.allowed_contributors.contains(contributor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_invariants() {
        assert!(VocabularyEntry::new("", "", vec![], vec!["to run".into()]).is_none());
        assert!(VocabularyEntry::new("走る", "走る", vec![], vec![]).is_none());

        let entry = VocabularyEntry::new(
            "走る",
            "走る [はしる]",
            vec!["Godan verb".into(), "Intransitive verb".into()],
            vec!["1. to run".into()],
        )
        .unwrap();
        assert_eq!(entry.headword(), "走る");
        assert_eq!(entry.parts_of_speech_label(), "Godan verb, Intransitive verb");
    }

    #[test]
    fn test_key_type_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(KeyType::from_settings(&settings).code(), 'P');

        settings.show_all_wwwjdic_vocab = true;
        assert_eq!(KeyType::from_settings(&settings).code(), 'J');
    }

    #[test]
    fn test_empty_policy_allows_everyone() {
        let policy = FilterPolicy::default();
        assert!(policy.allows("skent"));
        assert!(policy.allows("anyone"));
    }

    #[test]
    fn test_policy_from_settings() {
        let settings = Settings {
            forvo_min_rating: 1,
            forvo_username_whitelist_csv: "skent, poyotan".to_string(),
            ..Settings::default()
        };
        let policy = FilterPolicy::from_settings(&settings);
        assert_eq!(policy.minimum_rating, 1);
        assert!(policy.allows("skent"));
        assert!(policy.allows("poyotan"));
        assert!(!policy.allows("other"));
    }
}
