//! Minimal Telegram config: token, optional log path, optional greeting override.
//! Loaded from environment variables BOT_TOKEN, LOG_FILE, BOT_GREETING.

use anyhow::Result;
use std::env;

/// Telegram connectivity and logging configuration.
pub struct TelegramConfig {
    pub bot_token: String,
    pub log_file: Option<String>,
    pub greeting: Option<String>,
}

impl TelegramConfig {
    /// Loads from environment variables: BOT_TOKEN required, the rest optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let log_file = env::var("LOG_FILE").ok();
        let greeting = env::var("BOT_GREETING").ok().filter(|s| !s.is_empty());
        Ok(Self {
            bot_token,
            log_file,
            greeting,
        })
    }

    /// Constructs with the given token, rest None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            log_file: None,
            greeting: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.log_file.is_none());
        assert!(config.greeting.is_none());
    }
}
