//! Handler for the click analytics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link's total click count and its last five access log entries.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Expiry
///
/// Unlike redirect and inspect, this endpoint does not apply the expiry
/// check: an expired link's history stays readable until deletion.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let stats = state.stats_service.get_link_stats(&code).await?;

    Ok(Json(AnalyticsResponse::from(stats)))
}
