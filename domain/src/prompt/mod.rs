//! Prompt domain
//!
//! Templates for interviewer turns and session-end feedback.

mod template;

pub use template::InterviewPrompt;
