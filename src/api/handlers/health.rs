//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// The link store is process-local memory with no external dependencies,
/// so a responding process is by definition healthy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
