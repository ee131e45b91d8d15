//! Question bank.
//!
//! - [`entities::Question`]: a bank question with follow-up variants
//! - [`bank::QuestionBank`]: static bank plus randomized, difficulty-filtered selection

pub mod bank;
pub mod entities;
