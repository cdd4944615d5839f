//! Client for OpenAI-compatible chat-completions backends (Groq, OpenAI).
//!
//! Endpoints are derived from `LlmModelConfig::endpoint`:
//! - `POST {endpoint}/v1/chat/completions` — chat completion, streaming
//!   (SSE `data:` lines) or non-streaming.
//!
//! Groq serves the same protocol at a different base URL, so both cloud
//! providers share this client; the provider enum still distinguishes them
//! for configuration and user-facing hints.
//!
//! Constructor validation:
//! - `cfg.provider` must be an OpenAI-compatible one
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::{ChatServiceError, ConfigError, Result, make_snippet};
use crate::stream::{StreamAssembler, StreamUpdate};

/// One turn in a chat-completions `messages` array.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionMessage {
    /// One of: "system" | "user" | "assistant".
    pub role: String,
    pub content: String,
}

impl ChatCompletionMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

/// Thin client for Groq/OpenAI chat completions.
pub struct OpenAiCompatService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl OpenAiCompatService {
    /// Creates a new [`OpenAiCompatService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidProvider`] if `cfg.provider` is Ollama
    /// - [`ConfigError::MissingApiKey`] if no credential is configured
    /// - [`ConfigError::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`ChatServiceError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self> {
        if !cfg.provider.is_openai_compatible() {
            return Err(ConfigError::InvalidProvider.into());
        }

        let key_var = match cfg.provider {
            LlmProvider::Groq => "GROQ_API_KEY",
            _ => "OPENAI_API_KEY",
        };
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(key_var))?;

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ConfigError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                ChatServiceError::Decode(format!("invalid API key header: {e}"))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        let base = endpoint.trim_end_matches('/').to_string();
        let url_chat = format!("{}/v1/chat/completions", base);

        info!(
            provider = cfg.provider.label(),
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "chat completions service initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Performs a **non-streaming** chat completion.
    ///
    /// # Errors
    /// - [`ChatServiceError::HttpStatus`] for non-2xx responses
    /// - [`ChatServiceError::Transport`] for client/network failures
    /// - [`ChatServiceError::Decode`] on unexpected body shapes or an
    ///   empty `choices` array
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, messages: &[ChatCompletionMessage]) -> Result<String> {
        let body = ChatCompletionRequest::from_cfg(&self.cfg, messages, false);

        debug!(turns = messages.len(), "POST {}", self.url_chat);
        let resp = self.send(&body).await?;
        let resp = self.ensure_success(resp).await?;

        let out: ChatCompletionResponse = resp.json().await.map_err(|e| {
            ChatServiceError::Decode(format!(
                "serde error: {e}; expected `choices[0].message.content`"
            ))
        })?;

        out.choices
            .into_iter()
            .find_map(|c| c.message.and_then(|m| m.content))
            .ok_or_else(|| {
                ChatServiceError::Decode("empty `choices` in chat completion response".into())
            })
    }

    /// Performs a **streaming** chat completion over SSE `data:` lines.
    ///
    /// `on_update` receives the running text; returns the finished text.
    ///
    /// # Errors
    /// - [`ChatServiceError::HttpStatus`] before anything is emitted when
    ///   the server answers non-2xx
    /// - [`ChatServiceError::Transport`] on read failures; the partial
    ///   accumulator is discarded
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate_streaming(
        &self,
        messages: &[ChatCompletionMessage],
        mut on_update: impl FnMut(StreamUpdate),
    ) -> Result<String> {
        let body = ChatCompletionRequest::from_cfg(&self.cfg, messages, true);

        debug!(turns = messages.len(), "POST {} (stream)", self.url_chat);
        let resp = self.send(&body).await?;
        let resp = self.ensure_success(resp).await?;

        let mut assembler = StreamAssembler::new(self.cfg.provider, false);
        let mut body_stream = resp.bytes_stream();
        while let Some(chunk) = body_stream.next().await {
            let chunk = chunk?;
            for update in assembler.push_chunk(&chunk) {
                on_update(update);
            }
        }

        Ok(assembler.finish())
    }

    async fn send(&self, body: &ChatCompletionRequest<'_>) -> Result<reqwest::Response> {
        let mut req = self.client.post(&self.url_chat).json(body);
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
        let url = self.url_chat.clone();
        let text = resp.text().await.unwrap_or_default();
        Err(ChatServiceError::HttpStatus {
            status,
            url,
            snippet: make_snippet(&text),
        })
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatCompletionMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(
        cfg: &'a LlmModelConfig,
        messages: &'a [ChatCompletionMessage],
        stream: bool,
    ) -> Self {
        Self {
            model: &cfg.model,
            messages,
            temperature: cfg.temperature,
            max_tokens: cfg.max_tokens,
            stream,
        }
    }
}

/// Minimal response for a non-streaming `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessageOut>,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(provider: LlmProvider, api_key: Option<&str>) -> LlmModelConfig {
        LlmModelConfig {
            provider,
            model: "llama-3.3-70b-versatile".into(),
            endpoint: "https://api.groq.com/openai".into(),
            api_key: api_key.map(str::to_string),
            max_tokens: Some(2000),
            temperature: Some(0.7),
            stream: true,
            timeout_secs: None,
        }
    }

    #[test]
    fn requires_an_api_key() {
        assert!(matches!(
            OpenAiCompatService::new(cfg(LlmProvider::Groq, None)),
            Err(ChatServiceError::Config(ConfigError::MissingApiKey("GROQ_API_KEY")))
        ));
        assert!(OpenAiCompatService::new(cfg(LlmProvider::Groq, Some("gsk_x"))).is_ok());
    }

    #[test]
    fn rejects_the_local_provider() {
        assert!(matches!(
            OpenAiCompatService::new(cfg(LlmProvider::Ollama, Some("k"))),
            Err(ChatServiceError::Config(ConfigError::InvalidProvider))
        ));
    }

    #[test]
    fn request_body_matches_the_chat_completions_contract() {
        let config = cfg(LlmProvider::Groq, Some("gsk_x"));
        let messages = vec![
            ChatCompletionMessage::new("system", "You are a helpful AI assistant."),
            ChatCompletionMessage::new("user", "Hi"),
        ];
        let body = ChatCompletionRequest::from_cfg(&config, &messages, true);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.3-70b-versatile");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hi");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["stream"], true);
    }

    #[test]
    fn chat_url_is_derived_from_the_base_endpoint() {
        let svc = OpenAiCompatService::new(cfg(LlmProvider::Groq, Some("gsk_x"))).unwrap();
        assert_eq!(
            svc.url_chat,
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }
}
