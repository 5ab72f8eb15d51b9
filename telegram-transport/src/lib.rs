//! # telegram-transport
//!
//! Telegram glue layer: adapters from teloxide types to core types, the
//! [`bot_core::Bot`] implementation, minimal env config, and the two runners
//! ([`run_repl`] and [`run_dispatcher`]). Handles only Telegram connectivity and
//! handler-chain execution; no AI logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{run_dispatcher, run_repl};
