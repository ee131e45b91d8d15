//! Local Ollama chat API backend.

use super::http::{build_client, endpoint, post_json};
use async_trait::async_trait;
use interview_application::{GatewayError, LlmGateway};
use interview_domain::{Message, OllamaProviderConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    options: ChatOptions,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

impl ChatResponse {
    fn into_text(self) -> String {
        self.message.map(|m| m.content).unwrap_or_default()
    }
}

/// [`LlmGateway`] over a local Ollama server (non-streaming `/api/chat`).
pub struct OllamaGateway {
    client: reqwest::Client,
    config: OllamaProviderConfig,
}

impl OllamaGateway {
    pub fn new(config: OllamaProviderConfig, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            config,
        })
    }

    fn request_body<'a>(
        &'a self,
        system_prompt: &'a str,
        messages: &'a [Message],
        max_tokens: u32,
    ) -> ChatRequest<'a> {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(ChatMessage {
            role: "system",
            content: system_prompt,
        });
        wire.extend(messages.iter().map(|m| ChatMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));

        ChatRequest {
            model: &self.config.model,
            stream: false,
            options: ChatOptions {
                temperature: self.config.temperature,
                num_predict: max_tokens,
            },
            messages: wire,
        }
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[Message],
        max_tokens: u32,
    ) -> Result<String, GatewayError> {
        if self.config.base_url.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "Ollama base URL is empty (providers.ollama.base_url)".to_string(),
            ));
        }

        debug!(
            "Ollama request: model={}, messages={}, num_predict={}",
            self.config.model,
            messages.len(),
            max_tokens
        );

        let request = self
            .client
            .post(endpoint(&self.config.base_url, "/api/chat"));
        let body = self.request_body(system_prompt, messages, max_tokens);

        let response: ChatResponse = post_json(request, &body).await?;
        Ok(response.into_text())
    }

    fn describe(&self) -> String {
        format!("ollama/{}", self.config.model)
    }
}
