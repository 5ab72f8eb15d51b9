//! telegram-glm-bot: relays text messages to BigModel (alternate base URL) and sends
//! the reply back. Replies are memoized in an exact-match cache, provider calls are
//! gated at 10 per rolling 60 seconds, and the dispatcher shuts down cleanly on ctrl-c.

use anyhow::Result;
use bot_core::init_tracing;
use chat_handlers::{
    ChatReplyHandler, GreetingHandler, LoggingHandler, ReplyCache, RequestWindowLimiter,
};
use dotenvy::dotenv;
use handler_chain::HandlerChain;
use llm_client::{BigModelChatClient, BigModelConfig, LlmClient};
use std::sync::Arc;
use std::time::Duration;
use telegram_transport::{run_dispatcher, TelegramBotAdapter, TelegramConfig};
use tracing::info;

const MAX_REQUESTS_PER_WINDOW: usize = 10;
const WINDOW: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = TelegramConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let llm_cfg = BigModelConfig::from_env()?;
    let llm_client: Arc<dyn LlmClient> = Arc::new(
        BigModelChatClient::with_base_url(llm_cfg.api_key.clone(), llm_cfg.base_url.clone())
            .with_model(llm_cfg.model.clone())
            .with_system_prompt_opt(llm_cfg.system_prompt.clone()),
    );
    info!(model = %llm_cfg.model, base_url = %llm_cfg.base_url, "Using BigModel provider");

    let bot = teloxide::Bot::new(config.bot_token.clone());
    let bot_adapter: Arc<dyn bot_core::Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let mut greeting = GreetingHandler::new(bot_adapter.clone());
    if let Some(text) = config.greeting.clone() {
        greeting = greeting.with_greeting(text);
    }

    let reply_handler = ChatReplyHandler::new(llm_client, bot_adapter.clone())
        .with_cache(Arc::new(ReplyCache::new()))
        .with_limiter(Arc::new(RequestWindowLimiter::new(
            MAX_REQUESTS_PER_WINDOW,
            WINDOW,
        )));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(greeting))
        .add_handler(Arc::new(reply_handler));

    run_dispatcher(bot, chain).await
}
