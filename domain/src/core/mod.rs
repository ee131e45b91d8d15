//! Core domain concepts shared across all subdomains.
//!
//! - [`difficulty::Difficulty`]: difficulty tier with pacing parameters
//! - [`difficulty::InterviewMode`]: public servant / public corporation / mixed
//! - [`error::DomainError`]: domain-level errors

pub mod difficulty;
pub mod error;
pub mod string;
