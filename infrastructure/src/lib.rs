//! Infrastructure layer for pressure-interview
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP backends, configuration file
//! loading, and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FileOutputConfig,
    FileProvidersConfig, FileSessionConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{AnthropicGateway, OllamaGateway, build_gateway};
