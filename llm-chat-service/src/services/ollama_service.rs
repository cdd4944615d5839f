//! Thin client for the local Ollama API.
//!
//! - `POST {endpoint}/api/generate` — text generation, non-streaming
//!   (`stream=false`) or streaming newline-delimited JSON.
//!
//! The request body shape is dictated by the Ollama API contract and is
//! preserved exactly: `{model, prompt, stream, options:{temperature,
//! num_predict}}`.

use std::time::Duration;

use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{ChatServiceError, ConfigError, Result, make_snippet};
use crate::stream::{StreamAssembler, StreamUpdate};

/// A finished non-streaming generation.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    /// Chain-of-thought returned alongside the answer, when the model
    /// produces one.
    pub thinking: Option<String>,
}

/// Thin client for Ollama.
///
/// Initialized with a full [`LlmModelConfig`]. Reuses one HTTP client; the
/// main chat request carries no deadline unless the config sets one.
pub struct OllamaService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
}

impl OllamaService {
    /// Creates a new [`OllamaService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidProvider`] if `cfg.provider` is not Ollama
    /// - [`ConfigError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`ChatServiceError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        if cfg.provider != LlmProvider::Ollama {
            return Err(ConfigError::InvalidProvider.into());
        }

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        let client = reqwest::Client::builder().gzip(true).build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_generate = format!("{}/api/generate", base);

        Ok(Self {
            client,
            cfg,
            url_generate,
        })
    }

    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Performs a **non-streaming** generation request via `/api/generate`.
    ///
    /// # Errors
    /// - [`ChatServiceError::HttpStatus`] for non-2xx responses
    /// - [`ChatServiceError::Transport`] for client errors
    /// - [`ChatServiceError::Decode`] if the response cannot be parsed
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<Generation> {
        let body = GenerateRequest::from_cfg(&self.cfg, prompt, false);

        debug!("POST {}", self.url_generate);
        let resp = self.send(&body).await?;
        let resp = self.ensure_success(resp).await?;

        let out: GenerateResponse = resp.json().await.map_err(|e| {
            ChatServiceError::Decode(format!("serde error: {e}; ensure `stream=false` is used"))
        })?;

        Ok(Generation {
            text: out.response.unwrap_or_else(|| "No response received.".to_string()),
            thinking: out.thought.or(out.thinking),
        })
    }

    /// Performs a **streaming** generation request via `/api/generate`.
    ///
    /// Each decoded line updates the accumulator; `on_update` receives the
    /// running text and (with `show_thinking`) deduplicated thinking
    /// fragments. Returns the finished text.
    ///
    /// # Errors
    /// - [`ChatServiceError::HttpStatus`] before anything is emitted when
    ///   the server answers non-2xx
    /// - [`ChatServiceError::Transport`] on read failures; the partial
    ///   accumulator is discarded
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate_streaming(
        &self,
        prompt: &str,
        show_thinking: bool,
        mut on_update: impl FnMut(StreamUpdate),
    ) -> Result<String> {
        let body = GenerateRequest::from_cfg(&self.cfg, prompt, true);

        debug!("POST {} (stream)", self.url_generate);
        let resp = self.send(&body).await?;
        let resp = self.ensure_success(resp).await?;

        let mut assembler = StreamAssembler::new(LlmProvider::Ollama, show_thinking);
        let mut body_stream = resp.bytes_stream();
        while let Some(chunk) = body_stream.next().await {
            let chunk = chunk?;
            for update in assembler.push_chunk(&chunk) {
                on_update(update);
            }
        }

        Ok(assembler.finish())
    }

    async fn send(&self, body: &GenerateRequest<'_>) -> Result<reqwest::Response> {
        let mut req = self.client.post(&self.url_generate).json(body);
        if let Some(secs) = self.cfg.timeout_secs {
            req = req.timeout(Duration::from_secs(secs));
        }
        Ok(req.send().await?)
    }

    async fn ensure_success(&self, resp: reqwest::Response) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let url = self.url_generate.clone();
        let text = resp.text().await.unwrap_or_default();
        Err(ChatServiceError::HttpStatus {
            status,
            url,
            snippet: make_snippet(&text),
        })
    }
}

/* ==========================
HTTP payloads & options
========================== */

/// Request body for `/api/generate`.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

impl<'a> GenerateRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str, stream: bool) -> Self {
        Self {
            model: &cfg.model,
            prompt,
            stream,
            options: GenerateOptions {
                temperature: cfg.temperature,
                num_predict: cfg.max_tokens,
            },
        }
    }
}

/// Subset of Ollama `options` the chat client sets.
#[derive(Debug, Default, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Response body for a non-streaming `/api/generate`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    thought: Option<String>,
    thinking: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(endpoint: &str) -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Ollama,
            model: "llama3.2:latest".into(),
            endpoint: endpoint.into(),
            api_key: None,
            max_tokens: Some(2000),
            temperature: Some(0.7),
            stream: true,
            timeout_secs: None,
        }
    }

    #[test]
    fn rejects_invalid_endpoints() {
        assert!(OllamaService::new(cfg("")).is_err());
        assert!(OllamaService::new(cfg("localhost:11434")).is_err());
        assert!(OllamaService::new(cfg("http://localhost:11434")).is_ok());
    }

    #[test]
    fn rejects_mismatched_providers() {
        let mut wrong = cfg("http://localhost:11434");
        wrong.provider = LlmProvider::Groq;
        assert!(matches!(
            OllamaService::new(wrong),
            Err(ChatServiceError::Config(ConfigError::InvalidProvider))
        ));
    }

    #[test]
    fn request_body_matches_the_ollama_contract() {
        let model_cfg = cfg("http://localhost:11434");
        let body = GenerateRequest::from_cfg(&model_cfg, "Hello", true);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3.2:latest");
        assert_eq!(json["prompt"], "Hello");
        assert_eq!(json["stream"], true);
        assert_eq!(json["options"]["num_predict"], 2000);
        assert!((json["options"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn trailing_slash_is_trimmed_from_the_endpoint() {
        let svc = OllamaService::new(cfg("http://localhost:11434/")).unwrap();
        assert_eq!(svc.url_generate, "http://localhost:11434/api/generate");
    }

    #[tokio::test]
    async fn non_ok_responses_raise_before_any_message_is_assembled() {
        let svc = OllamaService::new(cfg("http://localhost:11434")).unwrap();
        let resp = http::Response::builder()
            .status(500)
            .body("model exploded")
            .unwrap();
        let err = svc
            .ensure_success(reqwest::Response::from(resp))
            .await
            .unwrap_err();
        match err {
            ChatServiceError::HttpStatus { status, snippet, .. } => {
                assert_eq!(status.as_u16(), 500);
                assert!(snippet.contains("model exploded"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }
}
