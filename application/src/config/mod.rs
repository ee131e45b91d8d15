//! Application-level configuration.
//!
//! - [`InterviewParams`]: token budgets for turn and feedback generation

pub mod interview_params;

pub use interview_params::InterviewParams;
