//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and two interchangeable providers speaking the same
//! chat-completions request/response shape: [`OpenAiChatClient`] (async-openai) and
//! [`BigModelChatClient`] (OpenAI-compatible endpoint behind an alternate base URL).
//! Transport-agnostic; used by chat-handlers and the bot binaries.

use anyhow::Result;
use async_trait::async_trait;

mod bigmodel;
mod config;
mod openai;

pub use bigmodel::BigModelChatClient;
pub use config::{BigModelConfig, OpenAiConfig};
pub use openai::OpenAiChatClient;

/// Role of a message, one-to-one with chat-completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of the API `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Default system instruction: Telegram renders replies as-is, so ask for plain text.
pub const DEFAULT_SYSTEM_CONTENT: &str =
    "Reply in plain text without Markdown or formatting symbols; the reply is sent to a chat as-is.";

/// LLM client interface: request a single completion from a list of messages.
/// Implementations prepend their system prompt.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (system/user/assistant).
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_constructors() {
        let m = ChatMessage::user("hi");
        assert_eq!(m.role, MessageRole::User);
        assert_eq!(m.content, "hi");
        assert_eq!(ChatMessage::system("s").role, MessageRole::System);
        assert_eq!(ChatMessage::assistant("a").role, MessageRole::Assistant);
    }
}
