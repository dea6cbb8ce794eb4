/// Default public Gemini API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Configuration for a Gemini model invocation.
///
/// # Fields
///
/// - `model`: Model identifier (e.g., `"gemini-2.5-pro"`).
/// - `endpoint`: API base URL (normally [`DEFAULT_ENDPOINT`]).
/// - `api_key`: API key; required, Gemini has no anonymous access.
/// - `max_output_tokens`: Cap on generated tokens (if set).
/// - `temperature`: Controls randomness (0.0 = deterministic).
/// - `top_p`: Nucleus sampling cutoff.
/// - `timeout_secs`: Optional request timeout in seconds (default 60).
#[derive(Debug, Clone)]
pub struct GeminiModelConfig {
    /// Model identifier string.
    pub model: String,

    /// API base URL, without the `/v1beta/...` suffix.
    pub endpoint: String,

    /// API key sent via the `x-goog-api-key` header.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_output_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl GeminiModelConfig {
    /// Builds a config for the given model and key with default endpoint and
    /// no sampling overrides.
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: Some(api_key.into()),
            max_output_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: None,
        }
    }
}
