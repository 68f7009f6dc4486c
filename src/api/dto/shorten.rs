//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// Wire names are camelCase. `originalUrl` is deserialized as optional so a
/// missing field surfaces as the service's validation error (400) instead of
/// a deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten; stored opaquely, only presence is checked.
    #[serde(default)]
    pub original_url: Option<String>,

    /// Optional caller-chosen short code, at most 20 characters.
    #[validate(length(max = 20, message = "Alias must not exceed 20 characters"))]
    pub alias: Option<String>,

    /// Optional expiry instant (RFC 3339). At or after it, the link is gone.
    pub expires_at: Option<DateTime<Utc>>,
}

/// JSON representation of a newly created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: u64,
}

impl From<Link> for ShortenResponse {
    fn from(link: Link) -> Self {
        Self {
            short_url: link.code,
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            clicks: link.clicks,
        }
    }
}
