//! Generation configuration from TOML (`[generation]` section)

use interview_application::InterviewParams;
use interview_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Token budget per interviewer turn
    pub turn_max_tokens: u32,
    /// Token budget for the feedback report
    pub feedback_max_tokens: u32,
    /// HTTP timeout for backend requests, in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = InterviewParams::default();
        Self {
            turn_max_tokens: params.turn_max_tokens,
            feedback_max_tokens: params.feedback_max_tokens,
            timeout_seconds: Some(120),
        }
    }
}

impl FileGenerationConfig {
    pub fn to_params(&self) -> InterviewParams {
        InterviewParams::default()
            .with_turn_max_tokens(self.turn_max_tokens)
            .with_feedback_max_tokens(self.feedback_max_tokens)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        [
            ("generation.turn_max_tokens", self.turn_max_tokens),
            ("generation.feedback_max_tokens", self.feedback_max_tokens),
        ]
        .into_iter()
        .filter(|(_, v)| *v == 0)
        .map(|(field, _)| {
            ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: field.to_string(),
                },
                format!("{field} must be greater than 0"),
            )
        })
        .collect()
    }
}
