//! User-facing chat settings, loaded from the environment.

use llm_chat_service::config::default_config::{
    DEFAULT_GROQ_URL, DEFAULT_OLLAMA_URL, DEFAULT_OPENAI_URL, groq_supported_model,
    ollama_supported_model,
};
use llm_chat_service::error_handler::{ConfigError, Result};
use llm_chat_service::{LlmModelConfig, LlmProvider};

/// Everything the chat client lets the user tune.
#[derive(Debug, Clone)]
pub struct Settings {
    pub provider: LlmProvider,
    pub model: String,
    pub ollama_url: String,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: String,
    pub stream_responses: bool,
    pub show_thinking: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Ollama,
            model: "llama3.2:latest".to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            groq_api_key: None,
            openai_api_key: None,
            temperature: 0.7,
            max_tokens: 2000,
            system_prompt: "You are a helpful AI assistant.".to_string(),
            stream_responses: true,
            show_thinking: false,
        }
    }
}

impl Settings {
    /// Builds settings from environment variables, with the stock defaults
    /// for anything unset.
    ///
    /// Recognized variables: `API_PROVIDER`, `LLM_MODEL`, `OLLAMA_URL`,
    /// `GROQ_API_KEY`, `OPENAI_API_KEY`, `LLM_TEMPERATURE`,
    /// `LLM_MAX_TOKENS`, `SYSTEM_PROMPT`, `STREAM_RESPONSES`,
    /// `SHOW_THINKING`.
    pub fn from_env() -> Self {
        let defaults = Settings::default();
        Self {
            provider: env("API_PROVIDER", "ollama")
                .parse()
                .unwrap_or(LlmProvider::Ollama),
            model: env("LLM_MODEL", &defaults.model),
            ollama_url: env("OLLAMA_URL", &defaults.ollama_url),
            groq_api_key: env_opt("GROQ_API_KEY"),
            openai_api_key: env_opt("OPENAI_API_KEY"),
            temperature: parse("LLM_TEMPERATURE", defaults.temperature),
            max_tokens: parse("LLM_MAX_TOKENS", defaults.max_tokens),
            system_prompt: env("SYSTEM_PROMPT", &defaults.system_prompt),
            stream_responses: env("STREAM_RESPONSES", "true") == "true",
            show_thinking: env("SHOW_THINKING", "false") == "true",
        }
    }

    /// Resolves the settings into a backend config, validating that the
    /// selected provider has what it needs and mapping the model onto one
    /// the backend can actually serve.
    ///
    /// # Errors
    /// - [`ConfigError::MissingApiKey`] for a cloud provider without a key
    /// - [`ConfigError::InvalidEndpoint`] for a blank local server URL
    pub fn model_config(&self) -> Result<LlmModelConfig> {
        match self.provider {
            LlmProvider::Ollama => {
                if self.ollama_url.trim().is_empty() {
                    return Err(ConfigError::InvalidEndpoint(self.ollama_url.clone()).into());
                }
                Ok(self.base_config(
                    ollama_supported_model(&self.model).to_string(),
                    self.ollama_url.clone(),
                    None,
                ))
            }
            LlmProvider::Groq => {
                let key = self
                    .groq_api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or(ConfigError::MissingApiKey("GROQ_API_KEY"))?;
                Ok(self.base_config(
                    groq_supported_model(&self.model).to_string(),
                    DEFAULT_GROQ_URL.to_string(),
                    Some(key),
                ))
            }
            LlmProvider::OpenAi => {
                let key = self
                    .openai_api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or(ConfigError::MissingApiKey("OPENAI_API_KEY"))?;
                Ok(self.base_config(self.model.clone(), DEFAULT_OPENAI_URL.to_string(), Some(key)))
            }
        }
    }

    fn base_config(&self, model: String, endpoint: String, api_key: Option<String>) -> LlmModelConfig {
        LlmModelConfig {
            provider: self.provider,
            model,
            endpoint,
            api_key,
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: self.stream_responses,
            timeout_secs: None,
        }
    }
}

fn env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_client() {
        let s = Settings::default();
        assert_eq!(s.provider, LlmProvider::Ollama);
        assert_eq!(s.model, "llama3.2:latest");
        assert_eq!(s.temperature, 0.7);
        assert_eq!(s.max_tokens, 2000);
        assert!(s.stream_responses);
        assert!(!s.show_thinking);
    }

    #[test]
    fn groq_without_a_key_is_a_configuration_error() {
        let s = Settings {
            provider: LlmProvider::Groq,
            ..Settings::default()
        };
        assert!(s.model_config().is_err());
    }

    #[test]
    fn groq_maps_local_models_onto_its_catalog() {
        let s = Settings {
            provider: LlmProvider::Groq,
            groq_api_key: Some("gsk_x".into()),
            model: "llama3.2:latest".into(),
            ..Settings::default()
        };
        let cfg = s.model_config().unwrap();
        assert_eq!(cfg.model, "llama-3.3-70b-versatile");
        assert_eq!(cfg.endpoint, DEFAULT_GROQ_URL);
    }

    #[test]
    fn ollama_maps_cloud_models_back_to_the_local_default() {
        let s = Settings {
            model: "mixtral-8x7b-32768".into(),
            ..Settings::default()
        };
        let cfg = s.model_config().unwrap();
        assert_eq!(cfg.model, "llama3.2:latest");
    }
}
