//! LLM Gateway port
//!
//! Defines the single capability the interview needs from a text-generation
//! backend: turn a system prompt plus messages into text.

use async_trait::async_trait;
use interview_domain::Message;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The backend is not usable as configured (missing key, empty URL, ...).
    /// Raised before any request is sent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The backend answered with a non-success HTTP status.
    #[error("Request failed ({status}): {message}")]
    Transport { status: u16, message: String },

    #[error("Connection error: {0}")]
    Connection(String),

    /// The reply envelope could not be read.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::Configuration(_))
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer. Each call is a
/// single request; implementations do not retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate a reply to `messages` under `system_prompt`, capped at `max_tokens`.
    async fn generate(
        &self,
        system_prompt: &str,
        messages: &[Message],
        max_tokens: u32,
    ) -> Result<String, GatewayError>;

    /// Short backend description for logs and the console header.
    fn describe(&self) -> String {
        "llm".to_string()
    }
}
