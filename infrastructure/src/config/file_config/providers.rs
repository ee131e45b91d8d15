//! Provider configuration from TOML (`[providers]` section)

use interview_domain::{
    AnthropicProviderConfig, ConfigIssue, ConfigIssueCode, OllamaProviderConfig, ProviderConfig,
    ProviderKind,
};
use serde::{Deserialize, Serialize};

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
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

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        let d = AnthropicProviderConfig::default();
        Self {
            api_key_env: d.api_key_env,
            api_key: d.api_key,
            base_url: d.base_url,
            model: d.model,
            api_version: d.api_version,
        }
    }
}

/// Local Ollama provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        let d = OllamaProviderConfig::default();
        Self {
            base_url: d.base_url,
            model: d.model,
            temperature: d.temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Backend for the session: "ollama" or "anthropic".
    pub default: String,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// Ollama settings.
    pub ollama: FileOllamaConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            default: ProviderKind::default().to_string(),
            anthropic: FileAnthropicConfig::default(),
            ollama: FileOllamaConfig::default(),
        }
    }
}

impl FileProvidersConfig {
    /// Convert to the domain provider config, reporting an unknown default.
    pub fn to_provider_config(&self) -> (ProviderConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let default = self.default.parse().unwrap_or_else(|_| {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: "providers.default".to_string(),
                    value: self.default.clone(),
                    valid_values: vec!["ollama".to_string(), "anthropic".to_string()],
                },
                format!(
                    "providers.default: unknown value '{}', falling back to '{}'",
                    self.default,
                    ProviderKind::default()
                ),
            ));
            ProviderKind::default()
        });

        let config = ProviderConfig {
            default,
            anthropic: AnthropicProviderConfig {
                api_key_env: self.anthropic.api_key_env.clone(),
                api_key: self.anthropic.api_key.clone(),
                base_url: self.anthropic.base_url.clone(),
                model: self.anthropic.model.clone(),
                api_version: self.anthropic.api_version.clone(),
            },
            ollama: OllamaProviderConfig {
                base_url: self.ollama.base_url.clone(),
                model: self.ollama.model.clone(),
                temperature: self.ollama.temperature,
            },
        };
        (config, issues)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.to_provider_config().1;
        for (field, value) in [
            ("providers.anthropic.model", &self.anthropic.model),
            ("providers.anthropic.base_url", &self.anthropic.base_url),
            ("providers.ollama.model", &self.ollama.model),
            ("providers.ollama.base_url", &self.ollama.base_url),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{field} is empty"),
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_convert() {
        let (config, issues) = FileProvidersConfig::default().to_provider_config();
        assert!(issues.is_empty());
        assert_eq!(config.default, ProviderKind::Ollama);
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.anthropic.api_version, "2023-06-01");
    }

    #[test]
    fn test_unknown_default_falls_back() {
        let file = FileProvidersConfig {
            default: "openai".to_string(),
            ..Default::default()
        };
        let (config, issues) = file.to_provider_config();
        assert_eq!(config.default, ProviderKind::Ollama);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_empty_model_is_flagged() {
        let mut file = FileProvidersConfig::default();
        file.ollama.model = String::new();
        assert_eq!(file.validate().len(), 1);
    }
}
