use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use hacker_stories::config::Config;
use hacker_stories::logging::init_tracing;
use hacker_stories::search::HttpSearchClient;
use hacker_stories::storage::{FileStore, KeyValueStore, MemoryStore};
use hacker_stories::ui::app::{App, AppSettings};
use hacker_stories::ui::runtime;
use hacker_stories::ui::stories::TracingObserver;

/// Browse Hacker News search results in the terminal.
#[derive(Debug, Parser)]
#[command(name = "hacker-stories", version, about)]
struct Cli {
    /// Config file (default: ~/.config/hacker-stories/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search term for this session; not saved until edited
    #[arg(long)]
    term: Option<String>,

    /// Search endpoint; the term is appended verbatim
    #[arg(long)]
    endpoint: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = endpoint.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let store = open_store(&config);
    let api = HttpSearchClient::new(config.search.endpoint.clone())
        .context("failed to build HTTP client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let mut app = App::new(
        AppSettings {
            endpoint: config.search.endpoint.clone(),
            default_term: config.search.default_term.clone(),
            initial_term: cli.term.clone(),
        },
        store,
    );
    app.add_observer(Box::new(TracingObserver));

    tracing::info!(endpoint = %config.search.endpoint, "Starting hacker-stories");
    runtime::run(app, Arc::new(api), runtime.handle().clone(), config.ui.tick_rate())
        .context("terminal UI failed")?;
    Ok(())
}

/// Open the storage file, falling back to memory when it is unreadable.
fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    let path = config.storage.resolved_path();
    match FileStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(error = %err, "Storage unavailable, search term will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}
