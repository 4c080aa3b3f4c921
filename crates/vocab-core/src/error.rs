/// Failures while reading a provider response. Each one is recovered at the
/// smallest granularity it applies to (one line, one item, one payload).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed dictionary line: {line:?}")]
    MalformedLine { line: String },

    #[error("No Japanese headword in: {segment:?}")]
    NoHeadwordFound { segment: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Dictionary response has an unterminated <pre> block")]
    UnterminatedPayload,
}

/// Outbound request failures, for either provider
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{0} returned an empty body")]
    EmptyBody(&'static str),
}
