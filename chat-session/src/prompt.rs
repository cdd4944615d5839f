//! Prompt assembly: system prompt, product-context block, rolling history.
//!
//! The context block format is part of the assistant's steering and is kept
//! stable; product data is injected as pretty-printed JSON so the model can
//! quote exact prices.

use llm_chat_service::services::open_ai_compat_service::ChatCompletionMessage;
use product_catalog::ProductRecord;

use crate::message::{ChatMessage, Role};

/// How many history turns are replayed to the backend.
const HISTORY_WINDOW: usize = 10;

/// Renders the product-context block appended to the system prompt when a
/// query matched catalog records. Empty input renders nothing.
pub fn product_context_block(records: &[ProductRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut block = String::from(
        "\n\n[AVAILABLE_PRODUCT_INFORMATION - Use this data to answer product-related questions:]\n",
    );
    for record in records {
        let pricing = record
            .prices
            .as_ref()
            .and_then(|p| serde_json::to_string_pretty(p).ok())
            .unwrap_or_else(|| "null".to_string());
        block.push_str(&format!(
            "\n- PRODUCT: {}\n- CATEGORY: {}\n- KEYWORDS: {}\n- PRICING: {}\n- IMAGE: {}\n",
            record.description,
            record.category.slug(),
            record.keywords.join(", "),
            pricing,
            record.filename,
        ));
    }
    block.push_str("\n[END_PRODUCT_INFORMATION]\n\n");
    block.push_str(
        "When users ask about products, pricing, or related information, use the data above to \
         provide accurate, specific details. Keep responses concise and focused on what the user \
         actually asked.",
    );
    block
}

/// System prompt plus the optional product-context block.
pub fn system_prompt_with_context(system_prompt: &str, records: &[ProductRecord]) -> String {
    format!("{system_prompt}{}", product_context_block(records))
}

fn recent(history: &[ChatMessage]) -> &[ChatMessage] {
    &history[history.len().saturating_sub(HISTORY_WINDOW)..]
}

/// Flat prompt for the local generate endpoint: system text, `Human:` /
/// `Assistant:` turns, and a trailing cue for the next assistant turn.
pub fn build_ollama_prompt(system: &str, history: &[ChatMessage], message: &str) -> String {
    let mut prompt = format!("{system}\n\n");
    for msg in recent(history) {
        let speaker = match msg.role {
            Role::User => "Human",
            Role::Assistant => "Assistant",
        };
        prompt.push_str(&format!("{speaker}: {}\n", msg.content));
    }
    prompt.push_str(&format!("Human: {message}\nAssistant:"));
    prompt
}

/// Messages array for the chat-completions backends.
pub fn build_chat_messages(
    system: &str,
    history: &[ChatMessage],
    message: &str,
) -> Vec<ChatCompletionMessage> {
    let mut messages = Vec::with_capacity(recent(history).len() + 2);
    if !system.is_empty() {
        messages.push(ChatCompletionMessage::new("system", system));
    }
    for msg in recent(history) {
        let role = match msg.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        messages.push(ChatCompletionMessage::new(role, msg.content.clone()));
    }
    messages.push(ChatCompletionMessage::new("user", message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_catalog::data::CATALOG;

    #[test]
    fn context_block_lists_each_record_with_its_pricing_json() {
        let records: Vec<ProductRecord> = vec![CATALOG[0].clone()];
        let block = product_context_block(&records);
        assert!(block.contains("[AVAILABLE_PRODUCT_INFORMATION"));
        assert!(block.contains("[END_PRODUCT_INFORMATION]"));
        assert!(block.contains("- IMAGE: 1-cupcakes.jpeg"));
        assert!(block.contains("\"Banana Crumb\""));
    }

    #[test]
    fn empty_context_adds_nothing_to_the_system_prompt() {
        assert_eq!(
            system_prompt_with_context("You are a helpful AI assistant.", &[]),
            "You are a helpful AI assistant."
        );
    }

    #[test]
    fn ollama_prompt_replays_turns_and_cues_the_assistant() {
        let history = vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello!"),
        ];
        let prompt = build_ollama_prompt("SYS", &history, "how much are cupcakes?");
        assert!(prompt.starts_with("SYS\n\n"));
        assert!(prompt.contains("Human: hi\n"));
        assert!(prompt.contains("Assistant: hello!\n"));
        assert!(prompt.ends_with("Human: how much are cupcakes?\nAssistant:"));
    }

    #[test]
    fn history_is_truncated_to_the_last_ten_turns() {
        let history: Vec<ChatMessage> =
            (0..15).map(|i| ChatMessage::user(format!("turn {i}"))).collect();
        let prompt = build_ollama_prompt("SYS", &history, "now");
        assert!(!prompt.contains("turn 4\n"));
        assert!(prompt.contains("turn 5\n"));
        assert!(prompt.contains("turn 14\n"));

        let messages = build_chat_messages("SYS", &history, "now");
        // system + 10 history turns + current message
        assert_eq!(messages.len(), 12);
    }
}
