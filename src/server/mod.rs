//! HTTP interface.
//!
//! ## Endpoints
//!
//! - `POST /translate` — translate a sentence between two supported languages
//! - `GET /health` — static health check
//!
//! Cross-origin requests are allowed from any origin so a browser frontend
//! served elsewhere can call the API directly.

pub mod models;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::error::Result;
use self::state::AppState;

/// Build the Axum router around a prepared [`AppState`].
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/translate", post(routes::translate))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to `address` and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>, address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, build_app(state)).await?;
    Ok(())
}
