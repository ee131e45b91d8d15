//! Interview context: the read-only catalogs a session runs against.

mod interview;
pub mod validation;

pub use interview::InterviewContext;
