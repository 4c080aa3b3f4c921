use std::env;

use serde::{Deserialize, Serialize};

fn default_wwwjdic_url() -> String {
    "http://nihongo.monash.edu/cgi-bin/wwwjdic".to_string()
}

fn default_forvo_url() -> String {
    "https://apifree.forvo.com".to_string()
}

fn default_forvo_country() -> String {
    "JPN".to_string()
}

/// Provider endpoints. Not part of the host settings store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// WWWJDIC cgi endpoint, query code is appended after `?`
    #[serde(default = "default_wwwjdic_url")]
    pub wwwjdic_url: String,
    /// Forvo API root, path segments are appended
    #[serde(default = "default_forvo_url")]
    pub forvo_url: String,
    /// Country filter sent with pronunciation queries
    #[serde(default = "default_forvo_country")]
    pub forvo_country: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            wwwjdic_url: default_wwwjdic_url(),
            forvo_url: default_forvo_url(),
            forvo_country: default_forvo_country(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let wwwjdic_url = env::var("WWWJDIC_URL").unwrap_or_else(|_| default_wwwjdic_url());
        let forvo_url = env::var("FORVO_URL").unwrap_or_else(|_| default_forvo_url());
        let forvo_country =
            env::var("FORVO_COUNTRY").unwrap_or_else(|_| default_forvo_country());

        Self {
            wwwjdic_url: trim_trailing_slash(wwwjdic_url),
            forvo_url: trim_trailing_slash(forvo_url),
            forvo_country,
        }
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_removed() {
        assert_eq!(
            trim_trailing_slash("https://apifree.forvo.com//".to_string()),
            "https://apifree.forvo.com"
        );
    }

    #[test]
    fn test_defaults_point_at_public_providers() {
        let network = NetworkConfig::default();
        assert_eq!(network.wwwjdic_url, "http://nihongo.monash.edu/cgi-bin/wwwjdic");
        assert_eq!(network.forvo_url, "https://apifree.forvo.com");
        assert_eq!(network.forvo_country, "JPN");
    }
}
