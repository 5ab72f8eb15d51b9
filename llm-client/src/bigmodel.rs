//! BigModel (Zhipu AI) provider: same chat-completions request/response shape as OpenAI,
//! reached through an alternate base URL. Talks to the API with reqwest directly.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ChatMessage, LlmClient, MessageRole, DEFAULT_SYSTEM_CONTENT};

/// Default API base; override for proxies or compatible deployments.
pub const BIGMODEL_API_BASE: &str = "https://open.bigmodel.cn/api/paas/v4";

/// [`LlmClient`] over BigModel's OpenAI-shaped chat completions endpoint.
#[derive(Debug, Clone)]
pub struct BigModelChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    system_prompt: Option<String>,
}

impl BigModelChatClient {
    /// Creates a client against [`BIGMODEL_API_BASE`] with the default model.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BIGMODEL_API_BASE.to_string())
    }

    /// Creates a client against the given base URL (no trailing slash).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model: "glm-4".to_string(),
            system_prompt: None,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    /// Returns the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn system_content(&self) -> &str {
        self.system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_CONTENT)
    }
}

fn role_str(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl LlmClient for BigModelChatClient {
    #[instrument(skip(self, messages))]
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(WireMessage {
            role: "system",
            content: self.system_content(),
        });
        for msg in &messages {
            wire.push(WireMessage {
                role: role_str(msg.role),
                content: &msg.content,
            });
        }

        let request = CompletionRequest {
            model: &self.model,
            messages: wire,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "BigModel API error ({}): {}",
                status,
                error_text
            ));
        }

        let completion: CompletionResponse = response.json().await?;

        let content = completion
            .choices
            .first()
            .ok_or_else(|| anyhow::anyhow!("No choices in response"))?
            .message
            .content
            .clone()
            .unwrap_or_default();

        Ok(content)
    }
}
