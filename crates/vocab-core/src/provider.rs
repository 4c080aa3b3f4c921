use crate::error::TransportError;
use crate::types::KeyType;

/// Source of raw dictionary text for a single kanji
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Fetch the raw response body for `kanji`
    async fn fetch(&self, kanji: &str, key_type: KeyType) -> Result<String, TransportError>;

    fn name(&self) -> &'static str;
}

/// Source of raw pronunciation listings for a headword
#[async_trait::async_trait]
pub trait AudioProvider: Send + Sync {
    /// Fetch the raw JSON body listing pronunciations of `headword`.
    ///
    /// `minimum_rating` is applied by the provider, not by the caller.
    async fn pronunciations(
        &self,
        headword: &str,
        minimum_rating: i64,
    ) -> Result<String, TransportError>;

    fn name(&self) -> &'static str;
}
