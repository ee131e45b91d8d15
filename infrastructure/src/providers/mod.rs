//! Text-generation backends implementing the [`LlmGateway`] port.

mod anthropic;
mod http;
mod ollama;

pub use anthropic::AnthropicGateway;
pub use ollama::OllamaGateway;

use interview_application::{GatewayError, LlmGateway};
use interview_domain::{ProviderConfig, ProviderKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the gateway selected by `config.default`.
pub fn build_gateway(
    config: &ProviderConfig,
    timeout: Option<Duration>,
) -> Result<Arc<dyn LlmGateway>, GatewayError> {
    let gateway: Arc<dyn LlmGateway> = match config.default {
        ProviderKind::Ollama => Arc::new(OllamaGateway::new(config.ollama.clone(), timeout)?),
        ProviderKind::Anthropic => {
            Arc::new(AnthropicGateway::new(config.anthropic.clone(), timeout)?)
        }
    };
    info!("Using backend {}", gateway.describe());
    Ok(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_gateway_follows_default() {
        let mut config = ProviderConfig::default();
        assert_eq!(
            build_gateway(&config, None).unwrap().describe(),
            "ollama/gemma3:4b"
        );
        config.default = ProviderKind::Anthropic;
        config.anthropic.model = "claude-x".to_string();
        assert_eq!(
            build_gateway(&config, None).unwrap().describe(),
            "anthropic/claude-x"
        );
    }
}
