use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "jupiter-todo",
    version,
    about = "A terminal todo board laid out on a responsive 12-column grid",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Greeting shown above the todo card.
    #[arg(long)]
    pub greeting: Option<String>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Widest the layout container grows, in cells.
    #[arg(long, value_name = "CELLS")]
    pub container_max_width: Option<u16>,
}
