//! Interview parameters: per-call generation budgets.
//!
//! [`InterviewParams`] groups the static parameters the orchestrator passes
//! to the backend on every call. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};

/// Generation budgets for the two kinds of backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewParams {
    /// Token budget for one interviewer turn.
    pub turn_max_tokens: u32,
    /// Token budget for the session feedback report.
    pub feedback_max_tokens: u32,
}

impl Default for InterviewParams {
    fn default() -> Self {
        Self {
            turn_max_tokens: 512,
            feedback_max_tokens: 1024,
        }
    }
}

impl InterviewParams {
    pub fn with_turn_max_tokens(mut self, max: u32) -> Self {
        self.turn_max_tokens = max;
        self
    }

    pub fn with_feedback_max_tokens(mut self, max: u32) -> Self {
        self.feedback_max_tokens = max;
        self
    }
}
