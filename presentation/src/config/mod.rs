//! Presentation-level configuration
//!
//! Settings the interview REPL needs once files, environment and CLI flags
//! have been merged.

use interview_domain::{DEFAULT_MAX_QUESTIONS, Difficulty, InterviewMode};

/// Resolved settings for one interview session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub difficulty: Difficulty,
    pub mode: InterviewMode,
    /// Questions drawn from the bank
    pub max_questions: usize,
    /// Per-answer limit in seconds; `None` disables timing checks
    pub time_limit_secs: Option<u32>,
    /// Seed for panel and question selection
    pub seed: Option<u64>,
    /// Show the spinner while the backend is working
    pub show_progress: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        let difficulty = Difficulty::default();
        Self {
            difficulty,
            mode: InterviewMode::default(),
            max_questions: DEFAULT_MAX_QUESTIONS,
            time_limit_secs: Some(difficulty.time_limit_secs()),
            seed: None,
            show_progress: true,
        }
    }
}
