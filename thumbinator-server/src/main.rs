use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use thumbinator_core::generator::build_catalog;
use thumbinator_server::{
    AppState, create_app,
    infra::{
        config::{ConfigLoad, ConfigLoader},
        telemetry::init_tracing,
    },
};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "thumbinator-server")]
#[command(about = "Searchable in-memory image catalog served over HTTP and SSE")]
struct Cli {
    /// Path to a thumbinator.toml configuration file
    #[arg(short, long, env = "THUMBINATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Number of synthetic images to generate (overrides config)
    #[arg(long)]
    catalog_size: Option<usize>,

    /// Seed for reproducible catalogs (overrides config)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file.clone() {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(size) = cli.catalog_size {
        config.catalog.size = size;
    }
    if let Some(seed) = cli.seed {
        config.catalog.seed = Some(seed);
    }

    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "loaded configuration file");
    }
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(warning = %warning.message, hint = %hint, "configuration warning")
            }
            None => {
                warn!(warning = %warning.message, "configuration warning")
            }
        }
    }

    let catalog_options = config.catalog.generator_options();
    let catalog = tokio::task::spawn_blocking(move || {
        build_catalog(&catalog_options)
    })
    .await
    .context("catalog generation task failed")?
    .into_shared();

    info!(
        total_images = catalog.size(),
        categories = catalog.categories().len(),
        tags = catalog.tags().len(),
        "catalog ready"
    );
    info!(
        stream.channel_capacity = config.stream.channel_capacity,
        stream.keep_alive = %humantime::format_duration(config.stream.keep_alive),
        stream.parallel_threshold = config.stream.parallel_threshold,
        dev_mode = config.dev_mode,
        "stream settings"
    );

    let bind = (config.server.host.clone(), config.server.port);
    let state = AppState::new(catalog, config);
    let router = create_app(state);

    let listener = tokio::net::TcpListener::bind((bind.0.as_str(), bind.1))
        .await
        .with_context(|| format!("failed to bind {}:{}", bind.0, bind.1))?;
    let addr = listener.local_addr().context("listener has no address")?;
    info!("Starting Thumbinator on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Thumbinator stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
