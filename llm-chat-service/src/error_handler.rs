//! Unified error handling for `llm-chat-service`.
//!
//! One top-level [`ChatServiceError`] for the whole crate, with
//! configuration problems grouped in [`ConfigError`]. Helpers for reading
//! environment variables return the unified [`Result<T>`] alias.
//!
//! Malformed stream frames are *not* errors: parsers drop them silently
//! and continue with the next line. Nothing in this crate retries
//! automatically; recovery is the user editing settings and resending.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, ChatServiceError>;

/// Top-level error for the `llm-chat-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChatServiceError {
    /// Configuration/validation errors, detected before any network call.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream returned a non-successful HTTP status.
    #[error("[Chat LLM Service] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Short snippet of the response body, for diagnostics.
        snippet: String,
    },

    /// Underlying HTTP transport error (connect/read failures).
    #[error("[Chat LLM Service] transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-streaming response body had an unexpected shape.
    #[error("[Chat LLM Service] failed to decode response: {0}")]
    Decode(String),

    /// Operation exceeded the configured deadline.
    #[error("[Chat LLM Service] operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors that realistically happen at config load/validation time.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[Chat LLM Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (ports, limits, temperatures).
    #[error("[Chat LLM Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// Unsupported provider name.
    #[error("[Chat LLM Service] unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The configured provider does not match the service being built.
    #[error("[Chat LLM Service] invalid provider for this service")]
    InvalidProvider,

    /// Cloud provider configured without a credential.
    #[error("[Chat LLM Service] missing API key for {0}")]
    MissingApiKey(&'static str),

    /// Endpoint empty or missing the http/https scheme.
    #[error("[Chat LLM Service] invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Trims a response body down to a short single-line snippet for logs and
/// error messages.
pub fn make_snippet(body: &str) -> String {
    body.chars().take(240).collect::<String>().replace('\n', " ")
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// [`ConfigError::MissingVar`] if the variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u32>().map(Some).map_err(|_| {
            ChatServiceError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Parses an optional `f32` from env (`Ok(None)` if unset/empty).
pub fn env_opt_f32(name: &'static str) -> Result<Option<f32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<f32>().map(Some).map_err(|_| {
            ChatServiceError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected f32",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty()
        || !(trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        return Err(ConfigError::InvalidEndpoint(value.to_string()).into());
    }
    Ok(())
}

/// Turns a configuration error into the setup instruction shown to the
/// user. These are never retried; the user fixes settings and resends.
pub fn config_instruction(provider: LlmProvider, err: &ConfigError) -> String {
    match err {
        ConfigError::MissingApiKey(_) => format!(
            "Please configure your {} API key in settings before sending messages.",
            provider.label()
        ),
        ConfigError::InvalidEndpoint(_) | ConfigError::MissingVar(_) => format!(
            "Please configure your {} server URL in settings before sending messages.",
            provider.label()
        ),
        other => other.to_string(),
    }
}

/// Maps an error to the apology the chat UI shows in place of a reply.
///
/// Configuration errors are setup instructions and pass through verbatim;
/// everything else gets the generic apology plus a provider-specific hint.
pub fn user_facing_hint(cfg: &LlmModelConfig, err: &ChatServiceError) -> String {
    const BASE: &str = "Sorry, there was an error processing your request.";

    if let ChatServiceError::Config(config_err) = err {
        return config_instruction(cfg.provider, config_err);
    }

    match cfg.provider {
        LlmProvider::Groq | LlmProvider::OpenAi => match err {
            ChatServiceError::HttpStatus { status, snippet, .. } => {
                if status.as_u16() == 401 {
                    format!(
                        "{BASE} Please check your {} API key in settings.",
                        cfg.provider.label()
                    )
                } else if status.as_u16() == 429 {
                    format!("{BASE} Rate limit exceeded. Please try again later.")
                } else if status.as_u16() == 404 && snippet.contains("model") {
                    format!(
                        "{BASE} The selected model is not available on {}. Please select a different model.",
                        cfg.provider.label()
                    )
                } else {
                    BASE.to_string()
                }
            }
            _ => BASE.to_string(),
        },
        LlmProvider::Ollama => match err {
            ChatServiceError::Transport(_) => format!(
                "{BASE} Please check your Ollama server URL ({}) and make sure Ollama is running.",
                cfg.endpoint
            ),
            other => format!("{BASE} Ollama error: {other}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(provider: LlmProvider) -> LlmModelConfig {
        LlmModelConfig {
            provider,
            model: "m".into(),
            endpoint: "http://localhost:11434".into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            stream: true,
            timeout_secs: None,
        }
    }

    fn http_status(code: u16, snippet: &str) -> ChatServiceError {
        ChatServiceError::HttpStatus {
            status: StatusCode::from_u16(code).unwrap(),
            url: "http://x".into(),
            snippet: snippet.into(),
        }
    }

    #[test]
    fn cloud_hints_cover_auth_rate_limit_and_missing_models() {
        let groq = cfg(LlmProvider::Groq);
        assert!(user_facing_hint(&groq, &http_status(401, "")).contains("API key"));
        assert!(user_facing_hint(&groq, &http_status(429, "")).contains("Rate limit"));
        assert!(
            user_facing_hint(&groq, &http_status(404, "model not found")).contains("not available")
        );
    }

    #[test]
    fn missing_credentials_surface_as_setup_instructions() {
        let groq = cfg(LlmProvider::Groq);
        let err = ChatServiceError::from(ConfigError::MissingApiKey("GROQ_API_KEY"));
        let hint = user_facing_hint(&groq, &err);
        assert!(hint.starts_with("Please configure your Groq API key"));
    }

    #[test]
    fn snippets_are_bounded_and_single_line() {
        let long = "x".repeat(1000) + "\nsecond line";
        let snippet = make_snippet(&long);
        assert!(snippet.len() <= 240);
        assert!(!snippet.contains('\n'));
    }
}
