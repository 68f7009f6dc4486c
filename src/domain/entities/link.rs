//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use crate::domain::entities::Click;

/// A shortened URL record with metadata and accumulated click history.
///
/// Represents the mapping between a short code and an original URL. The record
/// carries its own analytics state: a monotonically increasing click counter
/// and an append-only access log. `clicks` always equals `access_log.len()`.
#[derive(Debug, Clone)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: u64,
    pub access_log: Vec<Click>,
}

impl Link {
    /// Creates a fresh Link with zero clicks and an empty access log.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            clicks: 0,
            access_log: Vec::new(),
        }
    }

    /// Returns true if the link has passed its expiry time.
    ///
    /// The boundary is inclusive: a link whose `expires_at` equals the current
    /// instant is already expired. Links without `expires_at` never expire.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}
