// src/services/completion.rs
use anyhow::{Context, bail};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant that provides accurate information while being careful about compliance and safety.";

pub const MAX_TOKENS: u32 = 500;

/// Sends a chat-style prompt to an LLM and returns the generated text.
///
/// Implementors hide transport and vendor details so the chat pipeline can
/// run against a mock in tests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a system instruction followed by the user message and return the
    /// assistant's reply text.
    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<String>;
}

// Wire types for the OpenAI-compatible chat completions endpoint.

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

/// `CompletionClient` backed by an OpenAI-compatible HTTP API.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: system.to_string() },
                ChatMessage { role: "user".to_string(), content: user.to_string() },
            ],
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("completion API returned {status}: {detail}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("malformed completion response")?;

        match completion.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => bail!("completion response contained no choices"),
        }
    }
}
