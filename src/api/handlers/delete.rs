//! Handler for the link deletion endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Confirmation returned after a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// The code becomes immediately available for reuse by future create
/// requests; there is no tombstone.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown code.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteResponse {
        message: format!("Link \"{code}\" deleted."),
    }))
}
