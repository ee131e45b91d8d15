//! Presentation layer for pressure-interview
//!
//! This crate contains the CLI definition, console formatting,
//! the thinking spinner, and the interactive interview REPL.

pub mod cli;
pub mod config;
pub mod interview;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::SessionSettings;
pub use interview::plan::SessionPlan;
pub use interview::repl::{InterviewRepl, ReplError, SessionOutcome};
pub use output::console::{ConsoleFormatter, ScoreGrade, format_clock};
pub use progress::reporter::ThinkingSpinner;
