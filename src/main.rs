//! Vendor dispatch server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     (Accept: application/vnd.gecker.io-v1)
//!          │
//!          ▼
//!     ┌──────────┐   ┌────────────┐   ┌──────────────┐   ┌────────────┐
//!     │ request  │──▶│   vendor   │──▶│   version    │──▶│  v1 / v2   │
//!     │ id/trace │   │    gate    │   │   dispatch   │   │  handlers  │
//!     └──────────┘   └─────┬──────┘   └──────┬───────┘   └────────────┘
//!                          │ 404             │ 404
//!                          ▼                 ▼
//!                "Wrong vendor identifier"  "Version not found"
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use vendor_dispatch::config::{load_config, with_bind_address, ServerConfig};
use vendor_dispatch::http::server::shutdown_signal;
use vendor_dispatch::observability::{logging, metrics};
use vendor_dispatch::HttpServer;

#[derive(Parser)]
#[command(name = "vendor-dispatch")]
#[command(about = "Serve API versions selected by vendor media type", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config = with_bind_address(config, bind)?;
    }

    logging::init_logging(&config.observability.log_level);
    tracing::info!("vendor-dispatch v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        vendor = %config.vendor.name,
        versions = config.vendor.versions.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::from_config(config)?;
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
