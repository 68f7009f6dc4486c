//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`           - Create a short link
//! - `GET    /health`            - Health check
//! - `GET    /info/{code}`       - Link metadata, no click recorded
//! - `GET    /analytics/{code}`  - Click totals and the last five log entries
//! - `DELETE /delete/{code}`     - Remove a link, freeing its code
//! - `GET    /{code}`            - Redirect (records a click)
//!
//! Exact-match routes take precedence over the `/{code}` capture, so
//! `/health` and `/shorten` are never interpreted as short codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    analytics_handler, delete_handler, health_handler, link_info_handler, redirect_handler,
    shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/info/{code}", get(link_info_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/delete/{code}", delete(delete_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
