//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, recording the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// Every successful redirect advances the link's click counter and appends
/// the caller's address to its access log; both happen inside the store's
/// critical section, so concurrent redirects cannot desynchronize them.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 410 Gone for a known code
/// at or past its expiry.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .link_service
        .resolve(&code, &addr.ip().to_string())
        .await?;

    debug!("Redirecting {} -> {}", code, original_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
