//! Provider configuration loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

use super::bigmodel::BIGMODEL_API_BASE;

/// OpenAI provider config. `OPENAI_API_KEY` is required; the rest have defaults.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub system_prompt: Option<String>,
}

impl OpenAiConfig {
    /// Load from environment variables. Fails when OPENAI_API_KEY is absent.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let system_prompt = read_system_prompt();
        Ok(Self {
            api_key,
            base_url,
            model,
            system_prompt,
        })
    }
}

/// BigModel provider config. `BIGMODEL_API_KEY` is required; `BIGMODEL_BASE_URL`
/// overrides the default endpoint.
#[derive(Debug, Clone)]
pub struct BigModelConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub system_prompt: Option<String>,
}

impl BigModelConfig {
    /// Load from environment variables. Fails when BIGMODEL_API_KEY is absent.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("BIGMODEL_API_KEY").context("BIGMODEL_API_KEY not set")?;
        let base_url =
            env::var("BIGMODEL_BASE_URL").unwrap_or_else(|_| BIGMODEL_API_BASE.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "glm-4".to_string());
        let system_prompt = read_system_prompt();
        Ok(Self {
            api_key,
            base_url,
            model,
            system_prompt,
        })
    }
}

fn read_system_prompt() -> Option<String> {
    env::var("SYSTEM_PROMPT")
        .ok()
        .filter(|s| !s.trim().is_empty())
}
