//! Thin Gemini client for the review pipeline.
//!
//! One provider, one operation: a non-streaming `generateContent` call.
//! Errors are normalized through [`errors::AiLlmError`] so callers can treat
//! every failure mode (transport, HTTP status, decode) uniformly.

pub mod config;
pub mod errors;
pub mod gemini;

pub use config::GeminiModelConfig;
pub use errors::{AiLlmError, Result};
pub use gemini::GeminiService;
