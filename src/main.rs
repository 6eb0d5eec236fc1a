//! Acervo Educacional Ferreira Costa - Demo API
//!
//! A small HTTP API serving a fixed in-memory dataset, built with Tokio
//! and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                  DEMO API                    │
//!                         │                                              │
//!     Client Request      │  ┌─────────┐    ┌─────────────────────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│          api            │  │
//!                         │  │ server  │    │ meta / catalogo / auth  │  │
//!                         │  └─────────┘    │      / dashboard        │  │
//!                         │                 └───────────┬─────────────┘  │
//!                         │                             │                │
//!                         │                             ▼                │
//!     Client Response     │  ┌─────────┐    ┌─────────────────────────┐  │
//!     ◀───────────────────┼──│envelope │◀───│    data (DemoData)      │  │
//!                         │  │response │    │  usuarios/cursos/arqs   │  │
//!                         │  └─────────┘    └─────────────────────────┘  │
//!                         │                                              │
//!                         │  ┌────────────────────────────────────────┐  │
//!                         │  │          Cross-Cutting Concerns        │  │
//!                         │  │   config    lifecycle    tracing/CORS  │  │
//!                         │  └────────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acervo_demo_api::config::ServerConfig;
use acervo_demo_api::http::DemoServer;
use acervo_demo_api::lifecycle::{signals, startup, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acervo_demo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "acervo-demo-api starting"
    );

    let config = ServerConfig::default();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    startup::print_banner();

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // OS signals feed the shutdown coordinator
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = DemoServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
