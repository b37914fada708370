//! # SlotSync API
//!
//! Web server for the SlotSync availability service. Exposes REST
//! endpoints for managing practitioner schedules, their time slots, and
//! the read-only availability view booking engines consume.
//!
//! ## Layout
//!
//! Routes declare the URL surface, handlers do the work, middleware maps
//! domain errors onto HTTP, and config reads the environment. Every write
//! runs through the `slotsync-core` schedule model before it touches the
//! database, so a validation failure never leaves partial state behind.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use eyre::{Result, WrapErr};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
}

/// Assembles the full application router over the shared state.
fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::schedule::routes())
        .merge(routes::availability::routes())
        .with_state(state)
}

/// Browser-facing CORS policy for the configured origins.
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(origins)
        .allow_credentials(true))
}

/// Starts the API server: sets up logging, builds the router, and serves
/// until shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let state = Arc::new(ApiState { db_pool });
    let mut app = build_router(state);

    if let Some(origins) = &config.cors_origins {
        app = app.layer(cors_layer(origins)?);
    }

    // Bound handler latency; an elapsed timeout becomes a 408.
    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
