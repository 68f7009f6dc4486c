//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// The store is process-local memory, so there are no external components
/// to probe; a reachable process is a healthy one.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
