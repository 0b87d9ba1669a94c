//! Infrastructure layer with configuration loading.

/// Application configuration.
pub mod config;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
