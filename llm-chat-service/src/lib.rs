//! LLM backends for the Cupcake Lab chat client.
//!
//! One thin client per wire protocol:
//! - [`services::ollama_service::OllamaService`] — local Ollama
//!   `/api/generate`, newline-delimited JSON streaming.
//! - [`services::open_ai_compat_service::OpenAiCompatService`] — Groq and
//!   OpenAI chat completions, SSE `data:` streaming.
//!
//! Incremental responses are decoded by [`stream::StreamAssembler`], which
//! owns the per-request accumulator and thinking-status dedup. Errors are
//! normalized in [`error_handler`]; [`health_service`] provides the short
//! connectivity probe and model listing the settings screen uses.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;
pub mod stream;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{ChatServiceError, ConfigError, Result};
