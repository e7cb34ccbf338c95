pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use models::NewProduct;
use state::SharedState;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Runs the parsed command with a config already loaded (file + environment).
pub async fn run(config: Config) -> anyhow::Result<()> {
    let args = Cli::parse();

    config.validate()?;

    let prometheus_handle = if config.observability.metrics_enabled {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        Some(handle)
    } else {
        None
    };

    init_tracing(&config.general.log_level);

    if prometheus_handle.is_some() {
        info!("Prometheus metrics recorder initialized");
    }

    match args.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config, prometheus_handle).await,

        Commands::List {
            search,
            category,
            availability,
            price_range,
            sort_by,
        } => {
            let defaults = catalog::FilterOptions::default();
            let options = catalog::FilterOptions {
                search: search.unwrap_or(defaults.search),
                category: category.unwrap_or(defaults.category),
                availability: availability.unwrap_or(defaults.availability),
                price_range: price_range.unwrap_or(defaults.price_range),
                sort_by: sort_by.unwrap_or(defaults.sort_by),
            };
            cli::cmd_list_products(&config, &options).await
        }

        Commands::Show { id } => cli::cmd_show_product(&config, &id).await,

        Commands::Add {
            name,
            price,
            image,
            availability,
            category,
            description,
        } => {
            let input = NewProduct {
                name,
                price,
                image,
                availability: availability.unwrap_or_default(),
                category,
                description,
            };
            cli::cmd_add_product(&config, input).await
        }

        Commands::Remove { id, yes } => cli::cmd_remove_product(&config, &id, yes).await,

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("Storefront v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let shared = Arc::new(SharedState::new(config));
    info!(
        backend = shared.catalog.backend_name(),
        data_file = %shared.catalog.file_store().path().display(),
        "Product storage ready"
    );

    let app = api::router(api::create_app_state(shared, prometheus_handle));

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
