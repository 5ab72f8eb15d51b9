//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; telegram-transport implements it via teloxide,
//! tests substitute a mock.

use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> crate::error::Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> crate::error::Result<()> {
        self.send_message(&message.chat, text).await
    }
}
