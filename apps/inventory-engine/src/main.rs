//! Inventory Engine Binary
//!
//! Starts the inventory REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin inventory-engine
//! ```
//!
//! # Environment Variables
//!
//! - `INVENTORY_CONFIG`: Path to the YAML config file (default: config.yaml)
//! - `RUST_LOG`: Overrides the configured log filter

use std::net::SocketAddr;

use inventory_engine::Container;
use inventory_engine::config::{CONFIG_PATH_ENV, Config, load_config};
use inventory_engine::infrastructure::http::{cors_layer, create_router};
use inventory_engine::observability::{MetricsConfig, init_logging, init_metrics};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = load_config(config_path.as_deref())?;

    init_logging(&config.observability.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting inventory engine"
    );
    log_config(&config);

    start_metrics(&config);

    let container = Container::from_config(&config).await?;
    let app = create_router(container.app_state(env!("CARGO_PKG_VERSION")))
        .layer(cors_layer(&config.server.cors));

    let http_addr = config
        .server
        .socket_addr()
        .ok_or_else(|| anyhow::anyhow!("invalid server bind address"))?;

    tracing::info!(%http_addr, "HTTP server starting");
    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Inventory engine stopped");
    Ok(())
}

/// Load .env file from current directory when present.
fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        bind_address = %config.server.bind_address,
        cors_origins = ?config.server.cors.allowed_origins,
        utc_offset_minutes = config.reporting.utc_offset_minutes,
        seed_path = config.persistence.seed_path.as_deref().unwrap_or("-"),
        metrics_enabled = config.observability.metrics.enabled,
        "Configuration loaded"
    );
}

/// Start the Prometheus exporter when enabled. Failure is logged, not fatal.
fn start_metrics(config: &Config) {
    let settings = &config.observability.metrics;
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!(error = %e, addr = %settings.listen_addr, "Invalid metrics address");
            return;
        }
    };

    match init_metrics(&MetricsConfig::with_addr(addr)) {
        Ok(()) => tracing::info!(%addr, "Prometheus exporter listening"),
        Err(e) => tracing::warn!(error = %e, "Failed to start metrics exporter, continuing without it"),
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
