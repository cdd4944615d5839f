//! Connectivity probes and model listing for the settings flow.
//!
//! Unlike the main chat request, these calls carry a fixed 5-second
//! deadline: they exist to answer "is this backend reachable right now"
//! quickly. [`HealthService::test_connection`] is resilient and never
//! fails — errors become `success = false` statuses.
//!
//! Probes:
//! - Ollama: `GET {endpoint}/api/tags`
//! - Groq/OpenAI: `GET {endpoint}/v1/models` with Bearer auth

use std::time::Duration;

use reqwest::header;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::default_config::{FALLBACK_OLLAMA_MODELS, GROQ_MODELS};
use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::Result;

/// Deadline for probes and model listing.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a connectivity test, shaped for direct display.
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    pub success: bool,
    pub message: String,
}

impl ConnectionStatus {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Probes backends and lists their models, reusing one HTTP client.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// # Errors
    /// [`crate::error_handler::ChatServiceError::Transport`] if the HTTP
    /// client cannot be built.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Tests connectivity to the configured backend. Never fails; any
    /// error is folded into a `success = false` status.
    pub async fn test_connection(&self, cfg: &LlmModelConfig) -> ConnectionStatus {
        match cfg.provider {
            LlmProvider::Ollama => self.test_ollama(cfg).await,
            LlmProvider::Groq | LlmProvider::OpenAi => self.test_cloud(cfg).await,
        }
    }

    async fn test_ollama(&self, cfg: &LlmModelConfig) -> ConnectionStatus {
        let url = format!("{}/api/tags", cfg.endpoint.trim_end_matches('/'));
        debug!("GET {}", url);

        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                ConnectionStatus::ok("Connected successfully")
            }
            Ok(resp) => ConnectionStatus::fail(format!(
                "Server responded with status {}",
                resp.status().as_u16()
            )),
            Err(e) if e.is_timeout() => {
                ConnectionStatus::fail("Connection timeout - check if Ollama is running")
            }
            Err(e) => ConnectionStatus::fail(format!("Connection failed: {e}")),
        }
    }

    async fn test_cloud(&self, cfg: &LlmModelConfig) -> ConnectionStatus {
        let Some(api_key) = cfg.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return ConnectionStatus::fail(format!(
                "Please enter your {} API key",
                cfg.provider.label()
            ));
        };

        let url = format!("{}/v1/models", cfg.endpoint.trim_end_matches('/'));
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await;

        match resp {
            Ok(resp) if resp.status().is_success() => ConnectionStatus::ok(format!(
                "Connected successfully to {} API",
                cfg.provider.label()
            )),
            Ok(resp) => {
                let status_text = resp
                    .status()
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string();
                let detail = resp
                    .json::<CloudErrorBody>()
                    .await
                    .ok()
                    .and_then(|b| b.error)
                    .and_then(|e| e.message)
                    .unwrap_or(status_text);
                ConnectionStatus::fail(format!("API Error: {detail}"))
            }
            Err(e) if e.is_timeout() => {
                ConnectionStatus::fail("Connection timeout - check your internet connection")
            }
            Err(e) => ConnectionStatus::fail(format!("Connection failed: {e}")),
        }
    }

    /// Lists models the configured backend can serve.
    ///
    /// Groq reports its fixed known list; Ollama is asked via `/api/tags`
    /// and falls back to a canned local list when unreachable; OpenAI is
    /// asked via `/v1/models`.
    pub async fn fetch_models(&self, cfg: &LlmModelConfig) -> Vec<String> {
        match cfg.provider {
            LlmProvider::Groq => GROQ_MODELS.iter().map(|m| m.to_string()).collect(),
            LlmProvider::Ollama => self.fetch_ollama_models(cfg).await,
            LlmProvider::OpenAi => self.fetch_openai_models(cfg).await,
        }
    }

    async fn fetch_ollama_models(&self, cfg: &LlmModelConfig) -> Vec<String> {
        let url = format!("{}/api/tags", cfg.endpoint.trim_end_matches('/'));

        let fallback = || {
            FALLBACK_OLLAMA_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
        };

        let resp = match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                warn!(status = %resp.status(), "could not fetch models");
                return fallback();
            }
            Err(e) => {
                warn!(error = %e, "could not fetch models");
                return fallback();
            }
        };

        match resp.json::<OllamaTags>().await {
            Ok(tags) => {
                let names: Vec<String> = tags
                    .models
                    .or(tags.tags)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|t| t.name)
                    .collect();
                if names.is_empty() { fallback() } else { names }
            }
            Err(e) => {
                warn!(error = %e, "could not decode /api/tags");
                fallback()
            }
        }
    }

    async fn fetch_openai_models(&self, cfg: &LlmModelConfig) -> Vec<String> {
        let Some(api_key) = cfg.api_key.as_deref() else {
            return Vec::new();
        };
        let url = format!("{}/v1/models", cfg.endpoint.trim_end_matches('/'));

        let resp = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .send()
            .await;

        match resp {
            Ok(resp) if resp.status().is_success() => resp
                .json::<OpenAiModels>()
                .await
                .map(|m| m.data.into_iter().map(|item| item.id).collect())
                .unwrap_or_default(),
            Ok(resp) => {
                warn!(status = %resp.status(), "could not fetch models");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "could not fetch models");
                Vec::new()
            }
        }
    }
}

/* Minimal response shapes. */

#[derive(Debug, Deserialize)]
struct OllamaTags {
    models: Option<Vec<NamedTag>>,
    tags: Option<Vec<NamedTag>>,
}

#[derive(Debug, Deserialize)]
struct NamedTag {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiModels {
    #[serde(default)]
    data: Vec<ModelItem>,
}

#[derive(Debug, Deserialize)]
struct ModelItem {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CloudErrorBody {
    error: Option<CloudErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct CloudErrorDetail {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(provider: LlmProvider, api_key: Option<&str>) -> LlmModelConfig {
        LlmModelConfig {
            provider,
            model: "m".into(),
            endpoint: "http://localhost:11434".into(),
            api_key: api_key.map(str::to_string),
            max_tokens: None,
            temperature: None,
            stream: true,
            timeout_secs: None,
        }
    }

    #[tokio::test]
    async fn cloud_probe_without_a_key_asks_for_one() {
        let svc = HealthService::new().unwrap();
        let status = svc.test_connection(&cfg(LlmProvider::Groq, None)).await;
        assert!(!status.success);
        assert!(status.message.contains("Groq API key"));
    }

    #[tokio::test]
    async fn groq_model_listing_is_the_known_list() {
        let svc = HealthService::new().unwrap();
        let models = svc.fetch_models(&cfg(LlmProvider::Groq, Some("gsk_x"))).await;
        assert_eq!(models.len(), GROQ_MODELS.len());
        assert!(models.contains(&"llama-3.3-70b-versatile".to_string()));
    }
}
