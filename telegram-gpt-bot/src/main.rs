//! telegram-gpt-bot: relays text messages to OpenAI and sends the reply back.
//! No cache, no rate limit; plain REPL startup.

use anyhow::Result;
use bot_core::init_tracing;
use chat_handlers::{ChatReplyHandler, GreetingHandler, LoggingHandler};
use dotenvy::dotenv;
use handler_chain::HandlerChain;
use llm_client::{LlmClient, OpenAiChatClient, OpenAiConfig};
use std::sync::Arc;
use telegram_transport::{run_repl, TelegramBotAdapter, TelegramConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = TelegramConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let llm_cfg = OpenAiConfig::from_env()?;
    let llm_client: Arc<dyn LlmClient> = Arc::new(
        OpenAiChatClient::with_base_url(llm_cfg.api_key.clone(), llm_cfg.base_url.clone())
            .with_model(llm_cfg.model.clone())
            .with_system_prompt_opt(llm_cfg.system_prompt.clone()),
    );
    info!(model = %llm_cfg.model, "Using OpenAI provider");

    let bot = teloxide::Bot::new(config.bot_token.clone());
    let bot_adapter: Arc<dyn bot_core::Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let mut greeting = GreetingHandler::new(bot_adapter.clone());
    if let Some(text) = config.greeting.clone() {
        greeting = greeting.with_greeting(text);
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(greeting))
        .add_handler(Arc::new(ChatReplyHandler::new(llm_client, bot_adapter)));

    run_repl(bot, chain).await
}
