use serde::{Deserialize, Deserializer, Serialize};

fn default_min_rating() -> i64 {
    0
}

/// Accepts any JSON number. A fractional rating is truncated toward zero.
fn deserialize_rating<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Rating {
        Integer(i64),
        Float(f64),
    }

    Ok(match Rating::deserialize(deserializer)? {
        Rating::Integer(rating) => rating,
        Rating::Float(rating) => rating.trunc() as i64,
    })
}

/// Host settings store, one field per recognized option.
///
/// Missing keys fall back to their defaults at load time, so nothing
/// downstream has to deal with a partially-populated bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Forvo API key, audio is disabled entirely when absent or blank
    pub forvo_api_key: Option<String>,
    /// Minimum (upvotes - downvotes) a pronunciation needs
    #[serde(default = "default_min_rating", deserialize_with = "deserialize_rating")]
    pub forvo_min_rating: i64,
    /// Comma-separated contributor names, blank allows everyone
    pub forvo_username_whitelist_csv: String,
    /// Look up common and uncommon words instead of common only
    pub show_all_wwwjdic_vocab: bool,
    pub show_forvo_usernames: bool,
    pub show_vocab_beyond_at_top: bool,
    pub only_show_link_in_legend: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            forvo_api_key: None,
            forvo_min_rating: default_min_rating(),
            forvo_username_whitelist_csv: String::new(),
            show_all_wwwjdic_vocab: false,
            show_forvo_usernames: false,
            show_vocab_beyond_at_top: false,
            only_show_link_in_legend: false,
        }
    }
}

impl Settings {
    /// API key with surrounding whitespace removed, `None` if blank
    pub fn forvo_api_key(&self) -> Option<&str> {
        self.forvo_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn audio_enabled(&self) -> bool {
        self.forvo_api_key().is_some()
    }

    /// Whitelisted contributor names.
    ///
    /// Spaces are removed before splitting on commas and empty names are
    /// dropped, so a blank CSV yields an empty list (allow all).
    pub fn username_whitelist(&self) -> Vec<String> {
        self.forvo_username_whitelist_csv
            .replace(' ', "")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}
