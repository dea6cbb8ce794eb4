//! Unified error handling for `llm-service`.
//!
//! A single top-level [`AiLlmError`] for the whole crate, with a
//! provider-kinded [`ProviderError`] for everything the remote API can do
//! wrong. [`make_snippet`] trims response bodies for log/error messages.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiLlmError>;

/// Top-level error for the `llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiLlmError {
    /// Provider-level failure (bad config, HTTP status, decode, empty output).
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Underlying HTTP transport error.
    #[error("[LLM Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/// Which remote provider produced the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
}

/// Provider error with a concrete kind.
#[derive(Debug, Error)]
#[error("[LLM Service] {provider:?}: {kind}")]
pub struct ProviderError {
    pub provider: Provider,
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: Provider, kind: ProviderErrorKind) -> Self {
        Self { provider, kind }
    }
}

/// Concrete provider failure kinds.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    /// API key is required but absent from the config.
    #[error("missing API key")]
    MissingApiKey,

    /// Endpoint is empty or not http(s).
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Non-2xx HTTP status with a body snippet for diagnostics.
    #[error("{0}")]
    HttpStatus(HttpError),

    /// Response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The API returned no candidates / no text parts.
    #[error("empty candidates in response")]
    EmptyCandidates,
}

/// Status + URL + trimmed body snippet for a failed HTTP call.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub url: String,
    pub snippet: String,
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "http status {} from {}: {}",
            self.status, self.url, self.snippet
        )
    }
}

/// Trims a response body to a short single-line snippet for error messages.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 300;
    let mut s: String = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if s.len() > MAX {
        let mut cut = MAX;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push('…');
    }
    s
}
