//! # bot-core
//!
//! Core types and traits for the relay bots: [`Bot`], [`Handler`], message and user types,
//! error enums, and tracing initialization. Transport-agnostic; used by telegram-transport,
//! handler-chain, and chat-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
