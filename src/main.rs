use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use jupiter_todo::infrastructure::{AppConfig, CliArgs, StorageManager};
use jupiter_todo::presentation::widgets::{Greeting, TodoListCard};
use jupiter_todo::presentation::{App, RootView, Theme};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Starts logging from the command line before any config is read.
///
/// Returns a handle for swapping in the config file's level, unless
/// `RUST_LOG` or `--log-level` already fixed it.
fn init_logging(args: &CliArgs) -> Result<Option<FilterHandle>> {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let pinned = env_filter.is_some() || args.log_level.is_some();
    let filter = env_filter.unwrap_or_else(|| {
        EnvFilter::new(args.log_level.unwrap_or_default().to_string())
    });
    let (filter, handle) = reload::Layer::new(filter);

    let log_path = args.log_path.clone().or_else(AppConfig::default_log_path);
    if let Some(log_path) = log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok((!pinned).then_some(handle))
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let filter_handle = init_logging(&args)?;

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    if let Some(handle) = filter_handle {
        let level = config.log_level.to_string();
        handle.modify(|filter| *filter = EnvFilter::new(level))?;
    }

    info!(
        version = jupiter_todo::VERSION,
        todos = config.todos.len(),
        "Starting {}",
        jupiter_todo::NAME
    );

    let root = RootView::new(
        Box::new(Greeting::new(config.greeting.clone())),
        Box::new(TodoListCard::new(config.todos.clone())),
    );
    let theme = Theme::from_config(&config.theme);

    Ok(App::new(root, theme).with_container_max_width(config.ui.container_max_width))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
