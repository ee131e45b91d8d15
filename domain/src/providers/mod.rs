//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of backend settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;

/// Which text-generation backend serves the interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Local Ollama server.
    #[default]
    Ollama,
    /// Hosted Anthropic Messages API.
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            _ => Err(DomainError::InvalidValue {
                field: "provider",
                value: s.to_string(),
            }),
        }
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Backend used for the session.
    pub default: ProviderKind,
    /// Anthropic API settings.
    pub anthropic: AnthropicProviderConfig,
    /// Ollama settings.
    pub ollama: OllamaProviderConfig,
}

impl ProviderConfig {
    /// Model name of the selected backend.
    pub fn active_model(&self) -> &str {
        match self.default {
            ProviderKind::Ollama => &self.ollama.model,
            ProviderKind::Anthropic => &self.anthropic.model,
        }
    }

    /// Override the model name of the selected backend.
    pub fn set_active_model(&mut self, model: impl Into<String>) {
        match self.default {
            ProviderKind::Ollama => self.ollama.model = model.into(),
            ProviderKind::Anthropic => self.anthropic.model = model.into(),
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    pub model: String,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for AnthropicProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            api_version: "2023-06-01".to_string(),
        }
    }
}

impl AnthropicProviderConfig {
    /// Resolve the API key: explicit value first, then the environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }
}

/// Local Ollama provider configuration.
#[derive(Debug, Clone)]
pub struct OllamaProviderConfig {
    /// Base URL of the Ollama server (default: "http://localhost:11434").
    pub base_url: String,
    pub model: String,
    /// Sampling temperature (default: 0.8).
    pub temperature: f32,
}

impl Default for OllamaProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "gemma3:4b".to_string(),
            temperature: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("Ollama".parse::<ProviderKind>().unwrap(), ProviderKind::Ollama);
        assert_eq!("claude".parse::<ProviderKind>().unwrap(), ProviderKind::Anthropic);
        assert!("openai".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_active_model_follows_default() {
        let mut config = ProviderConfig::default();
        assert_eq!(config.active_model(), "gemma3:4b");
        config.default = ProviderKind::Anthropic;
        config.set_active_model("claude-test");
        assert_eq!(config.anthropic.model, "claude-test");
        assert_eq!(config.ollama.model, "gemma3:4b");
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config = AnthropicProviderConfig {
            api_key: Some("sk-explicit".to_string()),
            api_key_env: "PRESSURE_INTERVIEW_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-explicit"));
    }

    #[test]
    fn test_missing_api_key() {
        let config = AnthropicProviderConfig {
            api_key_env: "PRESSURE_INTERVIEW_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
