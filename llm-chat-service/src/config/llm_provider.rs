use std::str::FromStr;

use crate::error_handler::{ChatServiceError, ConfigError};

/// The backend used for chat inference.
///
/// `Ollama` is the local generate endpoint; `Groq` and `OpenAi` speak the
/// OpenAI-compatible chat-completions protocol and differ only in base URL,
/// credentials, and model catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
    /// Groq's hosted OpenAI-compatible API.
    Groq,
    /// OpenAI's chat completions API.
    OpenAi,
}

impl LlmProvider {
    /// True for backends that speak the OpenAI chat-completions protocol.
    pub fn is_openai_compatible(&self) -> bool {
        matches!(self, LlmProvider::Groq | LlmProvider::OpenAi)
    }

    /// Human-readable name used in status and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            LlmProvider::Ollama => "Ollama",
            LlmProvider::Groq => "Groq",
            LlmProvider::OpenAi => "OpenAI",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ChatServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(LlmProvider::Ollama),
            "groq" => Ok(LlmProvider::Groq),
            "openai" => Ok(LlmProvider::OpenAi),
            other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_providers_case_insensitively() {
        assert_eq!("Ollama".parse::<LlmProvider>().unwrap(), LlmProvider::Ollama);
        assert_eq!("GROQ".parse::<LlmProvider>().unwrap(), LlmProvider::Groq);
        assert_eq!("openai".parse::<LlmProvider>().unwrap(), LlmProvider::OpenAi);
        assert!("claude".parse::<LlmProvider>().is_err());
    }
}
