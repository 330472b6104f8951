//! HTTP server for the metrics API
//!
//! Routes:
//! - `GET /api/health`
//! - `GET /api/metrics/{cpu,memory,disk,network}`
//! - `GET /api/metrics/network/ports`
//! - `GET /api/metrics/schema`

pub mod api;
pub mod state;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use state::AppState;

/// Start the web server and run until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = SocketAddr::new(config.bind, config.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Serving metrics on http://{}", listener.local_addr()?);

    let app = create_router(state, config.cors);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState, cors: bool) -> Router {
    let metric_routes = Router::new()
        .route("/cpu", get(api::cpu_metrics))
        .route("/memory", get(api::memory_metrics))
        .route("/disk", get(api::disk_metrics))
        .route("/network", get(api::network_metrics))
        .route("/network/ports", get(api::port_traffic_metrics))
        .route("/schema", get(api::metric_schemas));

    let api_routes = Router::new()
        .nest("/metrics", metric_routes)
        .route("/health", get(api::health_check));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
