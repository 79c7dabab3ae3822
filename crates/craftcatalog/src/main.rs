mod cache;
mod cli;
mod commands;
mod config;
mod output;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Cli, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "craftcatalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if cli.no_cache {
        config.cache_enabled = false;
    }

    let state = AppState::new(&config, cli.in_memory).await?;

    tracing::info!(
        backend = if cli.in_memory { "memory" } else { config.sqlite_path.as_str() },
        cache = config.cache_enabled,
        strategy = %config.cache_invalidation,
        "Catalog ready"
    );

    commands::run(cli.command, cli.format, &state).await?;

    if let Some(cache) = &state.cache {
        tracing::debug!(entries = cache.entry_count().await, "Cache state at exit");
    }

    Ok(())
}
