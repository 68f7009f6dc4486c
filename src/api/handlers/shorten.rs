//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "alias": "my-link",                   // optional, max 20 chars
///   "expiresAt": "2026-12-31T23:59:59Z"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "shortUrl": "my-link",
///   "originalUrl": "https://example.com",
///   "createdAt": "2026-08-23T10:00:00Z",
///   "expiresAt": "2026-12-31T23:59:59Z",
///   "clicks": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `originalUrl` is missing/empty or the alias is longer
/// than 20 characters, and 409 if the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(
            payload.original_url.unwrap_or_default(),
            payload.alias,
            payload.expires_at,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse::from(link))))
}
