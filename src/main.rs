//! Item Details Service
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ──▶ handlers ──▶ details       │
//!                           │   (axum, layers)   (path       resolver      │
//!     Client Response       │                    segments)   (pure)        │
//!     ◀─────────────────────┼── JSON / text ◀───────────────────┘          │
//!                           │                                              │
//!                           │   config · lifecycle · observability         │
//!                           └──────────────────────────────────────────────┘
//! ```
//!
//! Routes:
//! - `GET /` returns `Root page`
//! - `GET /items/{itemId}/subitems/{subitemId}` returns the details JSON

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use item_details::config::{load_config, resolve_addr, ServiceConfig};
use item_details::http::HttpServer;
use item_details::lifecycle::{signals, Shutdown};
use item_details::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "item-details")]
#[command(about = "Item details HTTP service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?args.config,
        "item-details starting"
    );

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match resolve_addr(&config.observability.metrics_address) {
            Some(addr) => metrics::init_metrics(addr),
            None => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to resolve metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
