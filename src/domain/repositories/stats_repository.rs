//! Repository trait for click analytics reads.

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Analytics snapshot for a single short link.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub code: String,
    pub total_clicks: u64,
    /// The most recent log entries, capped by the caller-supplied limit,
    /// in original insertion (chronological) order.
    pub recent_clicks: Vec<Click>,
}

/// Repository interface for click statistics.
///
/// Analytics reads deliberately skip the expiry check: an expired link's
/// accumulated history stays queryable until the link is deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Retrieves the click statistics for a short code.
    ///
    /// Returns `Ok(None)` if no link is stored under the code. `limit` caps
    /// the number of entries in [`LinkStats::recent_clicks`]; the total click
    /// count is unaffected by it.
    async fn get_stats_by_code(&self, code: &str, limit: usize)
    -> Result<Option<LinkStats>, AppError>;
}
