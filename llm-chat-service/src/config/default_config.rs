//! Default backend configs loaded from environment variables.
//!
//! Convenience constructors for [`LlmModelConfig`], one per provider.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_MODEL`       = model identifier (optional, provider default)
//! - `LLM_MAX_TOKENS`  = generation cap (optional, u32)
//! - `LLM_TEMPERATURE` = sampling temperature (optional, f32)
//!
//! Provider-specific:
//! - `OLLAMA_URL`     = Ollama endpoint (default `http://localhost:11434`)
//! - `GROQ_API_KEY`   = Groq credential (mandatory for Groq)
//! - `GROQ_URL`       = Groq base URL (default `https://api.groq.com/openai`)
//! - `OPENAI_API_KEY` = OpenAI credential (mandatory for OpenAI)
//! - `OPENAI_URL`     = OpenAI base URL (default `https://api.openai.com`)

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{Result, env_opt_f32, env_opt_u32, must_env};

/// Default Ollama endpoint on the local machine.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
/// Groq's OpenAI-compatible base URL.
pub const DEFAULT_GROQ_URL: &str = "https://api.groq.com/openai";
/// OpenAI's base URL.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

/// Model used when none is configured, or when a cloud-only model name is
/// sent at the local backend.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:latest";
/// Groq model used when the configured one is not in the known list.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Models known to be served by Groq.
pub const GROQ_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "llama3-8b-8192",
    "llama3-70b-8192",
    "mixtral-8x7b-32768",
    "gemma2-9b-it",
];

/// Local models offered when the Ollama tag listing is unreachable.
pub const FALLBACK_OLLAMA_MODELS: &[&str] = &[
    "llama3.2:latest",
    "deepseek-coder:1.3b",
    "deepseek-r1:8b",
    "deepseek-coder-v2:latest",
];

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Maps a configured model onto one Groq actually serves.
pub fn groq_supported_model(model: &str) -> &str {
    if GROQ_MODELS.contains(&model) {
        model
    } else {
        DEFAULT_GROQ_MODEL
    }
}

/// Maps a configured model onto one the local backend can serve. A
/// Groq-only model name left over from switching providers falls back to
/// the default local model.
pub fn ollama_supported_model(model: &str) -> &str {
    if GROQ_MODELS.contains(&model) {
        DEFAULT_OLLAMA_MODEL
    } else {
        model
    }
}

/// Config for the local Ollama backend.
///
/// # Defaults
/// - endpoint `http://localhost:11434`, model `llama3.2:latest`
/// - no request deadline (chat generations may run long)
pub fn config_ollama() -> Result<LlmModelConfig> {
    let model = env_or("LLM_MODEL", DEFAULT_OLLAMA_MODEL);
    Ok(LlmModelConfig {
        provider: LlmProvider::Ollama,
        model: ollama_supported_model(&model).to_string(),
        endpoint: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
        api_key: None,
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: env_opt_f32("LLM_TEMPERATURE")?,
        stream: true,
        timeout_secs: None,
    })
}

/// Config for the Groq backend.
///
/// # Errors
/// [`crate::error_handler::ConfigError::MissingVar`] when `GROQ_API_KEY`
/// is unset.
pub fn config_groq() -> Result<LlmModelConfig> {
    let api_key = must_env("GROQ_API_KEY")?;
    let model = env_or("LLM_MODEL", DEFAULT_GROQ_MODEL);
    Ok(LlmModelConfig {
        provider: LlmProvider::Groq,
        model: groq_supported_model(&model).to_string(),
        endpoint: env_or("GROQ_URL", DEFAULT_GROQ_URL),
        api_key: Some(api_key),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: env_opt_f32("LLM_TEMPERATURE")?,
        stream: true,
        timeout_secs: None,
    })
}

/// Config for the OpenAI backend.
///
/// # Errors
/// [`crate::error_handler::ConfigError::MissingVar`] when `OPENAI_API_KEY`
/// is unset.
pub fn config_openai() -> Result<LlmModelConfig> {
    let api_key = must_env("OPENAI_API_KEY")?;
    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAi,
        model: env_or("LLM_MODEL", "gpt-4o-mini"),
        endpoint: env_or("OPENAI_URL", DEFAULT_OPENAI_URL),
        api_key: Some(api_key),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: env_opt_f32("LLM_TEMPERATURE")?,
        stream: true,
        timeout_secs: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_models_fall_back_per_provider() {
        assert_eq!(groq_supported_model("llama3.2:latest"), DEFAULT_GROQ_MODEL);
        assert_eq!(groq_supported_model("llama3-8b-8192"), "llama3-8b-8192");
        assert_eq!(
            ollama_supported_model("llama-3.3-70b-versatile"),
            DEFAULT_OLLAMA_MODEL
        );
        assert_eq!(ollama_supported_model("qwen3:14b"), "qwen3:14b");
    }
}
