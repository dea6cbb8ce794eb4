//! Run configuration from the CI environment.
//!
//! Two required secrets (`GEMINI_API_KEY`, `GITHUB_TOKEN`) plus the two
//! ambient values GitHub Actions provides: the qualified repository name
//! and the path to the JSON event payload. The run only proceeds when the
//! payload carries a `pull_request` object.

use std::env;
use std::fs;
use std::path::Path;

use llm_service::GeminiModelConfig;

use crate::errors::{BotResult, ConfigError};

/// Default GitHub REST API base.
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

/// Everything one review run needs, validated up front.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Qualified repository name, "owner/repo".
    pub repo: String,
    /// PR number extracted from the event payload.
    pub pr_number: u64,
    /// GitHub API token.
    pub github_token: String,
    /// GitHub API base URL.
    pub github_api: String,
    /// Gemini model configuration (key, model, endpoint).
    pub llm: GeminiModelConfig,
}

impl RunContext {
    /// Reads and validates the full run configuration from the process
    /// environment. Any failure here is a configuration error; `main`
    /// logs it and exits cleanly rather than crashing.
    pub fn from_env() -> BotResult<Self> {
        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        let github_token = require_env("GITHUB_TOKEN")?;
        let repo = require_env("GITHUB_REPOSITORY")?;
        let event_path = require_env("GITHUB_EVENT_PATH")?;

        let pr_number = pr_number_from_event(Path::new(&event_path))?;

        let github_api =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API.to_string());
        let model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| llm_service::config::DEFAULT_MODEL.to_string());

        Ok(Self {
            repo,
            pr_number,
            github_token,
            github_api,
            llm: GeminiModelConfig::new(model, gemini_api_key),
        })
    }
}

/// Extracts `pull_request.number` from a GitHub event payload file.
///
/// Errors with [`ConfigError::NotPullRequest`] when the event is not a
/// pull-request event (push, schedule, ...).
pub fn pr_number_from_event(path: &Path) -> BotResult<u64> {
    let raw = fs::read_to_string(path).map_err(|e| {
        ConfigError::EventPayload(format!("cannot read {}: {e}", path.display()))
    })?;
    let event: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| ConfigError::EventPayload(e.to_string()))?;

    event
        .get("pull_request")
        .and_then(|pr| pr.get("number"))
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| ConfigError::NotPullRequest.into())
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}
