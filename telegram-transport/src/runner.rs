//! Runners: convert teloxide messages to core::Message and pass them to the HandlerChain.
//!
//! Two startup flavors the bot variants pick from: [`run_repl`] (teloxide's plain REPL)
//! and [`run_dispatcher`] (explicit dispatcher that drops pending updates and shuts
//! down cleanly on ctrl-c).

use anyhow::Result;
use bot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use std::time::Duration;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts teloxide's REPL with the given HandlerChain. Each message is converted
/// to core::Message and handled in a spawned task so the REPL returns immediately.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity confirmed");
    }

    info!("Bot started (repl)");

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message"
                );
            }

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Starts an explicit dispatcher: pending updates are dropped, polling uses a 10s
/// long-poll timeout, and ctrl-c stops the dispatcher cleanly before returning.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity confirmed");
    }

    info!("Bot started (dispatcher, drop pending updates)");

    let chain = handler_chain;
    let handler = Update::filter_message().endpoint(move |msg: teloxide::types::Message| {
        let chain = chain.clone();
        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }
            respond(())
        }
    });

    let listener = Polling::builder(bot.clone())
        .timeout(Duration::from_secs(10))
        .drop_pending_updates()
        .build();

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("Bot stopped");
    Ok(())
}
