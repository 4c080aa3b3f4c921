use async_trait::async_trait;
use vocab_core::{AudioProvider, TransportError};

const PROVIDER: &str = "Forvo";

/// Build a `word-pronunciations` query, best-rated first
pub fn pronunciations_url(
    base_url: &str,
    api_key: &str,
    headword: &str,
    minimum_rating: i64,
    country: &str,
) -> String {
    format!(
        "{base_url}/key/{api_key}/format/json/action/word-pronunciations/word/{}/language/ja/rate/{minimum_rating}/country/{country}/order/rate-desc",
        urlencoding::encode(headword)
    )
}

#[derive(Clone)]
pub struct ForvoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    country: String,
}

impl ForvoClient {
    pub fn new(base_url: String, api_key: String, country: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            country,
        }
    }
}

#[async_trait]
impl AudioProvider for ForvoClient {
    async fn pronunciations(
        &self,
        headword: &str,
        minimum_rating: i64,
    ) -> Result<String, TransportError> {
        let url = pronunciations_url(
            &self.base_url,
            &self.api_key,
            headword,
            minimum_rating,
            &self.country,
        );

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

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_pronunciations_url() {
        assert_eq!(
            pronunciations_url("https://apifree.forvo.com", "KEY", "走る", 1, "JPN"),
            "https://apifree.forvo.com/key/KEY/format/json/action/word-pronunciations\
/word/%E8%B5%B0%E3%82%8B/language/ja/rate/1/country/JPN/order/rate-desc"
        );
    }

    #[tokio::test]
    async fn test_pronunciations_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_regex(
                r"^/key/KEY/format/json/action/word-pronunciations/word/[^/]+/language/ja/rate/0/country/JPN/order/rate-desc$",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
            .mount(&mock_server)
            .await;

        let client = ForvoClient::new(mock_server.uri(), "KEY".into(), "JPN".into());
        let body = client.pronunciations("走る", 0).await.unwrap();
        assert_eq!(body, r#"{"items":[]}"#);
    }

    #[tokio::test]
    async fn test_pronunciations_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = ForvoClient::new(mock_server.uri(), "KEY".into(), "JPN".into());
        let err = client.pronunciations("走る", 0).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Status {
                provider: "Forvo",
                status: 403
            }
        ));
    }
}
