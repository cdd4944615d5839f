//! Chat message model.
//!
//! Persistence of history belongs to the embedding application; this crate
//! only produces the messages.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    fn id_suffix(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// RFC3339 timestamp of creation.
    pub timestamp: String,
    /// Chain-of-thought shown alongside the reply, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    /// Attached product image references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("msg_{}_{}", now.timestamp_millis(), role.id_suffix()),
            role,
            content: content.into(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            thinking: None,
            images: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn with_images(mut self, images: Option<Vec<String>>) -> Self {
        self.images = images.filter(|i| !i.is_empty());
        self
    }

    pub fn with_thinking(mut self, thinking: Option<String>) -> Self {
        self.thinking = thinking;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_role_tagged_ids_and_timestamps() {
        let msg = ChatMessage::user("hello");
        assert!(msg.id.starts_with("msg_"));
        assert!(msg.id.ends_with("_user"));
        assert!(msg.timestamp.ends_with('Z'));
        assert_eq!(msg.role, Role::User);
    }

    #[test]
    fn empty_image_lists_are_dropped() {
        let msg = ChatMessage::assistant("x").with_images(Some(vec![]));
        assert!(msg.images.is_none());
    }
}
