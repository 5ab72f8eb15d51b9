//! Greeting handler: replies to the `/start` command, passes everything else on.

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Default `/start` reply; override with [`GreetingHandler::with_greeting`].
pub const DEFAULT_GREETING: &str = "Hi! I'm a ChatGPT bot. Send me a message.";

/// Handles `/start` (including the `/start@botname` group form) with a fixed greeting.
pub struct GreetingHandler {
    bot: Arc<dyn Bot>,
    greeting: String,
}

/// True when the text is the `/start` command, with or without a @botname suffix
/// or trailing arguments.
fn is_start_command(text: &str) -> bool {
    let Some(first) = text.split_whitespace().next() else {
        return false;
    };
    let command = first.split('@').next().unwrap_or(first);
    command == "/start"
}

impl GreetingHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }
}

#[async_trait]
impl Handler for GreetingHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !is_start_command(&message.content) {
            return Ok(HandlerResponse::Continue);
        }

        self.bot.reply_to(message, &self.greeting).await?;
        info!(user_id = message.user.id, "Sent greeting");
        Ok(HandlerResponse::Reply(self.greeting.clone()))
    }
}
