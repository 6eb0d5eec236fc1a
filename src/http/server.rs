//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, CORS)
//! - Bind server to listener
//! - Serve until the shutdown signal fires
//!
//! # Design Decisions
//! - The demo dataset is built once here and shared via `Arc`
//! - Unmatched paths fall through to a JSON 404 in the standard envelope
//! - CORS is wide open; the demo is meant to be called from anywhere

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::{auth, catalogo, dashboard, meta};
use crate::config::ServerConfig;
use crate::data::DemoData;
use crate::http::error::ApiError;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dados: Arc<DemoData>,
}

/// HTTP server for the demo API.
pub struct DemoServer {
    router: Router,
    config: ServerConfig,
}

impl DemoServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            dados: Arc::new(DemoData::new()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(meta::api_info))
            .route("/health", get(meta::health_check))
            .route("/swagger", get(meta::swagger_doc))
            .route("/api/usuarios", get(catalogo::list_usuarios))
            .route("/api/cursos", get(catalogo::list_cursos))
            .route("/api/arquivos", get(catalogo::list_arquivos))
            .route("/api/auth/login", post(auth::login))
            .route("/api/dashboard/stats", get(dashboard::dashboard_stats))
            .fallback(unmatched_route)
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(CorsLayer::permissive())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Fallback handler for paths no route matched.
async fn unmatched_route(uri: Uri) -> ApiError {
    tracing::warn!(path = %uri.path(), "No route matched");
    ApiError::RotaNaoEncontrada
}
