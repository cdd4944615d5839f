//! Per-session orchestration: one in-flight request, explicit product
//! context, canned error replies.

use llm_chat_service::error_handler::{self, ChatServiceError};
use llm_chat_service::services::ollama_service::OllamaService;
use llm_chat_service::services::open_ai_compat_service::OpenAiCompatService;
use llm_chat_service::stream::StreamUpdate;
use llm_chat_service::{LlmModelConfig, LlmProvider};
use product_catalog::composer::ProductReply;
use product_catalog::data::CATALOG;
use product_catalog::{ProductRecord, ResponseComposer};
use tracing::{debug, error, info};

use crate::message::ChatMessage;
use crate::pacing;
use crate::prompt;
use crate::settings::Settings;

/// What a send produces, in order: the recorded user turn, transient
/// typing/thinking status lines, and one or more finished assistant turns.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    UserMessage(ChatMessage),
    /// Transient status text (running stream text, thinking updates).
    /// Cosmetic only: never committed to history.
    Typing(String),
    Assistant(ChatMessage),
}

/// A chat session holding settings, history, and the single-flight guard.
///
/// The guard is a plain flag: a second `send_message` while a request is
/// outstanding returns immediately without touching history, and the flag
/// is always cleared when the request finishes, success or failure.
pub struct ChatSession {
    settings: Settings,
    history: Vec<ChatMessage>,
    streaming: bool,
}

impl ChatSession {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            history: Vec::new(),
            streaming: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Submit one user message and drive it to completion.
    ///
    /// Configuration problems are detected before any network call and
    /// returned as errors for the caller to surface as setup instructions.
    /// Transport and backend failures never escape: they become a canned
    /// assistant reply appended to history, so the user always sees a
    /// response.
    pub async fn send_message(
        &mut self,
        content: &str,
        mut on_event: impl FnMut(SessionEvent),
    ) -> Result<(), ChatServiceError> {
        if self.streaming {
            debug!("request already in flight, ignoring submission");
            return Ok(());
        }

        let composer = ResponseComposer::new(&CATALOG);
        let matcher = composer.matcher();
        let is_image_request = matcher.is_image_request(content);
        let is_product_query = matcher.is_product_specific_query(content);
        let reply = if is_image_request || is_product_query {
            composer
                .answer_product_question(content)
                .or_else(|| composer.generate_image_response(content))
        } else {
            None
        };

        // Validate configuration before committing anything.
        let cfg = self.settings.model_config()?;

        // History snapshot excludes the message being sent; the prompt
        // builder appends it as the trailing turn.
        let history_snapshot = self.history.clone();

        let user_message = ChatMessage::user(content);
        self.history.push(user_message.clone());
        on_event(SessionEvent::UserMessage(user_message));

        self.streaming = true;
        let result = self
            .run_request(&cfg, content, &history_snapshot, reply.as_ref(), &mut on_event)
            .await;
        self.streaming = false;

        if let Err(err) = result {
            error!(error = %err, provider = cfg.provider.label(), "chat request failed");
            let apology = error_handler::user_facing_hint(&cfg, &err);
            let message = ChatMessage::assistant(apology);
            self.history.push(message.clone());
            on_event(SessionEvent::Assistant(message));
        }

        Ok(())
    }

    async fn run_request(
        &mut self,
        cfg: &LlmModelConfig,
        content: &str,
        history: &[ChatMessage],
        reply: Option<&ProductReply>,
        on_event: &mut impl FnMut(SessionEvent),
    ) -> Result<(), ChatServiceError> {
        let context: &[ProductRecord] = reply.map(|r| r.context.as_slice()).unwrap_or(&[]);
        let system = prompt::system_prompt_with_context(&self.settings.system_prompt, context);
        let images = reply.map(|r| r.images.clone());

        on_event(SessionEvent::Typing("Processing your request...".into()));

        let (text, thinking) = match cfg.provider {
            LlmProvider::Ollama => {
                let service = OllamaService::new(cfg.clone())?;
                let prompt_text = prompt::build_ollama_prompt(&system, history, content);
                if self.settings.stream_responses {
                    let text = service
                        .generate_streaming(&prompt_text, self.settings.show_thinking, |update| {
                            on_event(SessionEvent::Typing(typing_line(update)));
                        })
                        .await?;
                    (text, None)
                } else {
                    let generation = service.generate(&prompt_text).await?;
                    (generation.text, generation.thinking)
                }
            }
            LlmProvider::Groq | LlmProvider::OpenAi => {
                let service = OpenAiCompatService::new(cfg.clone())?;
                let messages = prompt::build_chat_messages(&system, history, content);
                let text = if self.settings.stream_responses {
                    service
                        .generate_streaming(&messages, |update| {
                            on_event(SessionEvent::Typing(typing_line(update)));
                        })
                        .await?
                } else {
                    service.generate(&messages).await?
                };
                (text, None)
            }
        };

        info!(
            provider = cfg.provider.label(),
            chars = text.len(),
            with_context = !context.is_empty(),
            "chat response assembled"
        );

        if self.settings.show_thinking {
            if let Some(thought) = &thinking {
                on_event(SessionEvent::Typing(format!("Thinking: {thought}")));
                tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
            }
        }

        // Paced emission; the first finished message carries the images
        // and thinking, the rest are plain sentences.
        let mut first = true;
        let log = &mut self.history;
        pacing::pace(&text, |fragment| {
            let mut message = ChatMessage::assistant(fragment);
            if first {
                message = message
                    .with_images(images.clone())
                    .with_thinking(thinking.clone());
                first = false;
            }
            log.push(message.clone());
            on_event(SessionEvent::Assistant(message));
        })
        .await;

        Ok(())
    }
}

fn typing_line(update: StreamUpdate) -> String {
    match update {
        StreamUpdate::Text(text) => text,
        StreamUpdate::Thinking(thought) => format!("Thinking: {thought}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_chat_service::ConfigError;

    #[test]
    fn missing_cloud_credentials_fail_before_any_network_call() {
        let settings = Settings {
            provider: LlmProvider::Groq,
            groq_api_key: None,
            ..Settings::default()
        };
        let session = ChatSession::new(settings);
        let err = session.settings().model_config().unwrap_err();
        assert!(matches!(
            err,
            ChatServiceError::Config(ConfigError::MissingApiKey("GROQ_API_KEY"))
        ));
    }

    #[tokio::test]
    async fn config_errors_bubble_without_touching_history() {
        let settings = Settings {
            provider: LlmProvider::Groq,
            groq_api_key: None,
            ..Settings::default()
        };
        let mut session = ChatSession::new(settings);
        let mut events = Vec::new();
        let result = session
            .send_message("how much are cupcakes?", |e| events.push(e))
            .await;
        assert!(result.is_err());
        assert!(events.is_empty());
        assert!(session.history().is_empty());
    }
}
