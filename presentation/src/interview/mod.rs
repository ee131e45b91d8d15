//! Terminal interview session
//!
//! - [`plan::SessionPlan`]: panel and question draw for one session
//! - [`command::ReplCommand`]: slash commands at the answer prompt
//! - [`repl::InterviewRepl`]: the interactive loop

pub mod command;
pub mod plan;
pub mod repl;
