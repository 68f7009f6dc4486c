//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is resolved.
///
/// Captures the caller's network address and the moment of the redirect.
/// Entries are appended to a link's access log in arrival order and are
/// never modified or removed afterwards.
#[derive(Debug, Clone)]
pub struct Click {
    pub ip: String,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(ip: String, clicked_at: DateTime<Utc>) -> Self {
        Self { ip, clicked_at }
    }
}
