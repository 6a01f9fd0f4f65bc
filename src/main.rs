#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use clap::Parser;

use cocktails::{app::App, config::Cli, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config;

    // Keep guard alive so file logger flushes correctly
    let _log_guards = init_logging(&config);

    tracing::debug!("API URL: {}", config.api_url);
    tracing::debug!("Data file: {}", config.data_file.display());
    tracing::debug!(
        "Log file: {}",
        config
            .log_file
            .as_deref()
            .map_or_else(|| "<stderr only>".to_string(), |p| p.display().to_string())
    );
    tracing::debug!("Debounce: {} ms", config.debounce_ms);

    let app = Arc::new(App::new(config)?);
    app.run(cli.command).await
}
