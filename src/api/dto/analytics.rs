//! DTOs for the click analytics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;
use crate::domain::repositories::LinkStats;

/// Analytics summary for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub short_url: String,
    pub total_clicks: u64,
    /// The last five log entries in chronological (insertion) order.
    pub last_five: Vec<ClickEntry>,
}

/// A single access log entry on the wire.
#[derive(Debug, Serialize)]
pub struct ClickEntry {
    pub ip: String,
    #[serde(rename = "date")]
    pub clicked_at: DateTime<Utc>,
}

impl From<Click> for ClickEntry {
    fn from(click: Click) -> Self {
        Self {
            ip: click.ip,
            clicked_at: click.clicked_at,
        }
    }
}

impl From<LinkStats> for AnalyticsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_url: stats.code,
            total_clicks: stats.total_clicks,
            last_five: stats.recent_clicks.into_iter().map(ClickEntry::from).collect(),
        }
    }
}
