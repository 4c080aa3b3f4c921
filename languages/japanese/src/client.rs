use async_trait::async_trait;
use vocab_core::{DictionaryProvider, KeyType, TransportError};

const PROVIDER: &str = "WWWJDIC";

/// EDICT dictionary
const DICTIONARY_EDICT: char = '1';
/// Raw backdoor entry output
const OUTPUT_RAW_BACKDOOR: char = 'Z';
/// Dictionary lookup with UTF-8 lookup text
const SEARCH_UTF8_LOOKUP: char = 'U';

/// Build the backdoor lookup URL for `kanji`.
///
/// See http://www.edrdg.org/wwwjdic/wwwjdicinf.html#backdoor_tag
pub fn lookup_url(base_url: &str, kanji: &str, key_type: KeyType) -> String {
    format!(
        "{base_url}?{DICTIONARY_EDICT}{OUTPUT_RAW_BACKDOOR}{SEARCH_UTF8_LOOKUP}{}{}",
        key_type.code(),
        urlencoding::encode(kanji)
    )
}

#[derive(Clone)]
pub struct WwwjdicClient {
    client: reqwest::Client,
    base_url: String,
}

impl WwwjdicClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl DictionaryProvider for WwwjdicClient {
    async fn fetch(&self, kanji: &str, key_type: KeyType) -> Result<String, TransportError> {
        let url = lookup_url(&self.base_url, kanji, key_type);
        tracing::debug!("Querying WWWJDIC: {url}");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                provider: PROVIDER,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(TransportError::EmptyBody(PROVIDER));
        }

        Ok(body)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}
