//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::entities::TodoItem;

pub(crate) const APP_NAME: &str = "jupiter-todo";
pub(crate) const APP_QUALIFIER: &str = "dev";
pub(crate) const APP_ORGANIZATION: &str = "jupiter";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Message shown by the greeting widget.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Items listed on the todo card.
    #[serde(default)]
    pub todos: Vec<TodoItem>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Widest the layout container grows, in cells.
    #[serde(default = "default_container_max_width")]
    pub container_max_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            container_max_width: default_container_max_width(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

fn default_greeting() -> String {
    "Hello world!".to_string()
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

const fn default_container_max_width() -> u16 {
    120
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(greeting) = args.greeting {
            self.greeting = greeting;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(width) = args.container_max_width {
            self.ui.container_max_width = width;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("jupiter-todo.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::default(),
            greeting: default_greeting(),
            todos: Vec::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(LogLevel::Trace, "trace")]
    #[test_case(LogLevel::Info, "info")]
    #[test_case(LogLevel::Error, "error")]
    fn test_log_level_display_matches_filter_syntax(level: LogLevel, expected: &str) {
        assert_eq!(level.to_string(), expected);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.greeting, "Hello world!");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.ui.container_max_width, 120);
        assert_eq!(config.theme.accent_color, "Yellow");
        assert!(config.todos.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            log_level = "debug"

            [theme]
            accent_color = "#ff8800"
            "##,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.greeting, "Hello world!");
    }

    #[test]
    fn test_merge_with_args_overrides_only_given_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: Some(PathBuf::from("/tmp/jt.log")),
            log_level: None,
            greeting: Some("Howdy".to_string()),
            accent_color: None,
            container_max_width: Some(90),
        };

        config.merge_with_args(args);

        assert_eq!(config.greeting, "Howdy");
        assert_eq!(config.ui.container_max_width, 90);
        assert_eq!(config.theme.accent_color, "Yellow");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            config.effective_log_path(),
            Some(PathBuf::from("/tmp/jt.log"))
        );
    }
}
