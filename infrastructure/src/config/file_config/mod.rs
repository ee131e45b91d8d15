//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enumerated values are kept as strings here and parsed into domain types
//! with issues reported, so a typo degrades to a default instead of
//! refusing to start.

mod generation;
mod output;
mod providers;
mod session;

pub use generation::FileGenerationConfig;
pub use output::FileOutputConfig;
pub use providers::{FileAnthropicConfig, FileOllamaConfig, FileProvidersConfig};
pub use session::FileSessionConfig;

use interview_domain::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when the configuration has at least one error-severity issue.
#[derive(Error, Debug)]
#[error("Invalid configuration:\n{}", format_issues(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("  - {}", i.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session settings (difficulty, mode, question count, time limit)
    pub session: FileSessionConfig,
    /// Token budgets and HTTP timeout
    pub generation: FileGenerationConfig,
    /// Backend selection and credentials
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.session.validate());
        issues.extend(self.generation.validate());
        issues.extend(self.providers.validate());
        issues
    }

    /// Like [`validate`](Self::validate), but fails when any issue is an error.
    ///
    /// Warnings are returned for the caller to display.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let issues = self.validate();
        if issues.iter().any(|i| i.severity == Severity::Error) {
            return Err(ConfigValidationError { issues });
        }
        Ok(issues)
    }
}
