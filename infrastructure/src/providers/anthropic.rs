//! Anthropic Messages API backend.

use super::http::{build_client, endpoint, post_json};
use async_trait::async_trait;
use interview_application::{GatewayError, LlmGateway};
use interview_domain::{AnthropicProviderConfig, Message};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Text returned when the reply has no text block.
const EMPTY_REPLY: &str = "{}";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    fn into_text(self) -> String {
        self.content
            .into_iter()
            .next()
            .and_then(|b| b.text)
            .unwrap_or_else(|| EMPTY_REPLY.to_string())
    }
}

/// [`LlmGateway`] over the hosted Anthropic Messages API.
pub struct AnthropicGateway {
    client: reqwest::Client,
    config: AnthropicProviderConfig,
    api_key: Option<String>,
}

impl AnthropicGateway {
    /// Create the gateway. The API key is resolved now but only required
    /// when a request is made.
    pub fn new(
        config: AnthropicProviderConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key();
        Ok(Self {
            client: build_client(timeout)?,
            config,
            api_key,
        })
    }

    fn request_body<'a>(
        &'a self,
        system_prompt: &'a str,
        messages: &'a [Message],
        max_tokens: u32,
    ) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens,
            system: system_prompt,
            messages,
        }
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[Message],
        max_tokens: u32,
    ) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "Anthropic API key is not set (set {} or providers.anthropic.api_key)",
                self.config.api_key_env
            ))
        })?;

        debug!(
            "Anthropic request: model={}, messages={}, max_tokens={}",
            self.config.model,
            messages.len(),
            max_tokens
        );

        let request = self
            .client
            .post(endpoint(&self.config.base_url, "/v1/messages"))
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.config.api_version);
        let body = self.request_body(system_prompt, messages, max_tokens);

        let response: MessagesResponse = post_json(request, &body).await?;
        Ok(response.into_text())
    }

    fn describe(&self) -> String {
        format!("anthropic/{}", self.config.model)
    }
}
