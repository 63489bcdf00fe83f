mod config;
mod logging;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{Method, header};
use clap::{Parser, Subcommand};
use products::{InMemoryProductsRepository, Service};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

/// Catalog Server - product catalog REST API
#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Catalog Server - product catalog REST API")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging(&config.logging, cli.verbose)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.socket_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    let repo = Arc::new(InMemoryProductsRepository::new());
    let service = Arc::new(Service::new(repo, config.products.clone()));
    let app = build_app(service);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(signals::shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Catalog server stopped");
    Ok(())
}

fn build_app(service: Arc<Service>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    products::router(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
