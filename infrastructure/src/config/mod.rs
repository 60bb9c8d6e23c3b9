//! Configuration file loading for zar-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `ZAR_` (`ZAR_SERVER__ENDPOINT=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./zar.toml` or `./.zar.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/zar-chat/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, DEFAULT_ENDPOINT, FileConfig, FileOutputConfig,
    FileServerConfig, FileWidgetConfig, Severity,
};
pub use loader::ConfigLoader;
