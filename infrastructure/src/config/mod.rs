//! Configuration file loading for pressure-interview
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `PRESSURE_INTERVIEW_*`
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview.toml` or `./.interview.toml`
//! 4. Global: `$XDG_CONFIG_HOME/pressure-interview/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileConfig, FileGenerationConfig,
    FileOllamaConfig, FileOutputConfig, FileProvidersConfig, FileSessionConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
