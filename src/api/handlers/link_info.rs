//! Handler for the link inspection endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link_info::LinkInfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link's metadata without recording a click.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code and 410 Gone for an expired
/// one, matching the redirect rules.
pub async fn link_info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    Ok(Json(LinkInfoResponse::from(link)))
}
