//! Stateless URL-in-path forwarding proxy.
//!
//! A client addresses the proxy as `/<target URL>`, optionally
//! percent-encoded. The proxy fetches the target with redirect following
//! disabled, rewrites `Location` headers and HTML links so they keep
//! routing through the proxy, and returns the result with caching
//! disabled and CORS opened up.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                MIRROR PROXY                   │
//!                  │                                               │
//!  Client Request  │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!  ────────────────┼─▶│  http   │──▶│ routing  │──▶│ security  │  │
//!                  │  │ server  │   │ (target) │   │ (headers) │  │
//!                  │  └─────────┘   └──────────┘   └─────┬─────┘  │
//!                  │                                     │        │
//!                  │                                     ▼        │
//!                  │                               ┌───────────┐  │
//!                  │                               │ upstream  │──┼──▶ Origin
//!                  │                               │  client   │◀─┼─── Server
//!                  │                               └─────┬─────┘  │
//!                  │                                     │        │
//!  Client Response │  ┌──────────┐   ┌───────────┐       │        │
//!  ◀───────────────┼──│ response │◀──│  rewrite  │◀──────┘        │
//!                  │  │ finalize │   │ (loc/html)│                │
//!                  │  └──────────┘   └───────────┘                │
//!                  │                                               │
//!                  │  config · observability · lifecycle           │
//!                  └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use mirror_proxy::config::loader::load_config;
use mirror_proxy::config::schema::ProxyConfig;
use mirror_proxy::http::HttpServer;
use mirror_proxy::lifecycle::Shutdown;
use mirror_proxy::observability;

const CONFIG_PATH: &str = "proxy.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before logging so the log filter can come from it.
    let config = if Path::new(CONFIG_PATH).exists() {
        load_config(Path::new(CONFIG_PATH))?
    } else {
        ProxyConfig::default()
    };

    observability::init_tracing(&config.observability.log_level);

    tracing::info!("mirror-proxy v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
