//! # chat-handlers
//!
//! Handlers shared by the bot variants: [`GreetingHandler`] for `/start`,
//! [`LoggingHandler`] for message/response logging, and [`ChatReplyHandler`] which
//! relays text messages to an LLM provider. Also the two small utilities the
//! variants toggle: [`ReplyCache`] and [`RequestWindowLimiter`].

mod cache;
mod greeting;
mod logging;
mod rate_limit;
mod reply;

pub use cache::ReplyCache;
pub use greeting::{GreetingHandler, DEFAULT_GREETING};
pub use logging::LoggingHandler;
pub use rate_limit::RequestWindowLimiter;
pub use reply::{ChatReplyHandler, FALLBACK_MESSAGE};
