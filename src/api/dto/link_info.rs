//! DTOs for the link inspection endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Read-only view of a stored link.
///
/// Same shape as the creation response; the access log itself is only
/// exposed through the analytics endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfoResponse {
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: u64,
}

impl From<Link> for LinkInfoResponse {
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
