use crate::config::llm_provider::LlmProvider;

/// Configuration for one chat backend invocation.
///
/// # Fields
///
/// - `provider`: which backend to call (Ollama, Groq, OpenAI).
/// - `model`: model identifier (e.g. `"llama3.2:latest"`,
///   `"llama-3.3-70b-versatile"`).
/// - `endpoint`: base URL of the backend.
/// - `api_key`: credential for cloud providers; `None` for Ollama.
/// - `max_tokens`: generation cap (`num_predict` on Ollama).
/// - `temperature`: sampling temperature.
/// - `stream`: request incremental output framing.
/// - `timeout_secs`: deadline for the whole request. `None` means no
///   deadline — the main chat request is allowed to run indefinitely;
///   only probes and model listing use the short fixed timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub stream: bool,
    pub timeout_secs: Option<u64>,
}
