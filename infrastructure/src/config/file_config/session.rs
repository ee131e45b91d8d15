//! Session configuration from TOML (`[session]` section)

use interview_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_MAX_QUESTIONS, Difficulty, InterviewMode,
};
use serde::{Deserialize, Serialize};

/// Raw session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// "easy", "medium" or "hard"
    pub difficulty: String,
    /// "public_servant", "public_corp" or "mixed"
    pub mode: String,
    /// Questions drawn per session
    pub max_questions: usize,
    /// Enforce a per-answer time limit
    pub time_limit_enabled: bool,
    /// Per-answer limit in seconds; the difficulty tier's limit when unset
    pub time_limit_sec: Option<u32>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default().as_str().to_string(),
            mode: InterviewMode::default().as_str().to_string(),
            max_questions: DEFAULT_MAX_QUESTIONS,
            time_limit_enabled: true,
            time_limit_sec: None,
        }
    }
}

impl FileSessionConfig {
    /// Parse the difficulty, falling back to the default on unknown values.
    pub fn parse_difficulty(&self) -> (Difficulty, Vec<ConfigIssue>) {
        match self.difficulty.parse() {
            Ok(d) => (d, vec![]),
            Err(_) => (
                Difficulty::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "session.difficulty".to_string(),
                        value: self.difficulty.clone(),
                        valid_values: Difficulty::ALL.iter().map(|d| d.to_string()).collect(),
                    },
                    format!(
                        "session.difficulty: unknown value '{}', falling back to '{}'",
                        self.difficulty,
                        Difficulty::default()
                    ),
                )],
            ),
        }
    }

    /// Parse the interview mode, falling back to the default on unknown values.
    pub fn parse_mode(&self) -> (InterviewMode, Vec<ConfigIssue>) {
        match self.mode.parse() {
            Ok(m) => (m, vec![]),
            Err(_) => (
                InterviewMode::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "session.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values: vec![
                            "public_servant".to_string(),
                            "public_corp".to_string(),
                            "mixed".to_string(),
                        ],
                    },
                    format!(
                        "session.mode: unknown value '{}', falling back to '{}'",
                        self.mode,
                        InterviewMode::default()
                    ),
                )],
            ),
        }
    }

    /// Effective per-answer limit, `None` when limits are disabled.
    pub fn time_limit_for(&self, difficulty: Difficulty) -> Option<u32> {
        self.time_limit_enabled
            .then(|| self.time_limit_sec.unwrap_or_else(|| difficulty.time_limit_secs()))
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.parse_difficulty().1);
        issues.extend(self.parse_mode().1);
        if self.max_questions == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "session.max_questions".to_string(),
                },
                "session.max_questions must be at least 1".to_string(),
            ));
        }
        if self.time_limit_sec == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "session.time_limit_sec".to_string(),
                },
                "session.time_limit_sec is 0; every answer will be shown as over the limit"
                    .to_string(),
            ));
        }
        issues
    }
}
