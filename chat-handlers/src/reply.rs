//! Chat reply handler: the implicit handler for non-command text messages.
//! Consults the reply cache, waits on the rate limiter, calls the LLM provider,
//! and relays the reply. Provider failures become a fixed apology message.

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::{RequestWindowLimiter, ReplyCache};

/// Sent to the user when the completion provider fails. Never varies per error.
pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// Relays non-command text to the configured [`LlmClient`] and sends the reply back.
/// Cache and limiter are optional; the variants decide which to attach.
pub struct ChatReplyHandler {
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
    cache: Option<Arc<ReplyCache>>,
    limiter: Option<Arc<RequestWindowLimiter>>,
}

/// Logs the error and its cause chain. First item with `first_msg`, rest with "Caused by".
fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
    for (i, cause) in e.chain().enumerate() {
        if i == 0 {
            error!(cause = %cause, "{}", first_msg);
        } else {
            error!(cause = %cause, "Caused by");
        }
    }
}

impl ChatReplyHandler {
    pub fn new(llm_client: Arc<dyn LlmClient>, bot: Arc<dyn Bot>) -> Self {
        Self {
            llm_client,
            bot,
            cache: None,
            limiter: None,
        }
    }

    /// Attaches the exact-match reply cache, consulted before any provider call.
    pub fn with_cache(mut self, cache: Arc<ReplyCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Attaches the rate limiter gating provider calls. Cache hits bypass it.
    pub fn with_limiter(mut self, limiter: Arc<RequestWindowLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }
}

#[async_trait]
impl Handler for ChatReplyHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.as_str();
        if text.is_empty() || message.is_command() {
            return Ok(HandlerResponse::Continue);
        }

        if let Some(cache) = &self.cache {
            if let Some(reply) = cache.get(text).await {
                info!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    "step: reply served from cache"
                );
                self.bot.reply_to(message, &reply).await?;
                return Ok(HandlerResponse::Reply(reply));
            }
        }

        if let Some(limiter) = &self.limiter {
            limiter.acquire().await;
        }

        match self
            .llm_client
            .chat_completion(vec![ChatMessage::user(text)])
            .await
        {
            Ok(reply) => {
                let reply = reply.trim().to_string();
                if let Some(cache) = &self.cache {
                    cache.insert(text.to_string(), reply.clone()).await;
                }
                self.bot.reply_to(message, &reply).await?;
                info!(
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    reply_len = reply.len(),
                    "Sent reply"
                );
                Ok(HandlerResponse::Reply(reply))
            }
            Err(e) => {
                log_error_chain(&e, "Completion request failed");
                self.bot.reply_to(message, FALLBACK_MESSAGE).await?;
                Ok(HandlerResponse::Reply(FALLBACK_MESSAGE.to_string()))
            }
        }
    }
}

// Unit/integration tests live in tests/chat_reply_handler_test.rs
