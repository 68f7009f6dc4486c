//! Click statistics and analytics service.

use std::sync::Arc;

use crate::domain::repositories::{LinkStats, StatsRepository};
use crate::error::AppError;
use serde_json::json;

/// Number of recent log entries returned by analytics queries.
const RECENT_CLICKS_LIMIT: usize = 5;

/// Service for retrieving click statistics.
///
/// Analytics reads intentionally skip the expiry check applied by resolve
/// and inspect: an expired link's accumulated history stays queryable until
/// the link is deleted.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the total click count and the last five log entries for a
    /// short code, in chronological (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link is stored under the code.
    pub async fn get_link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        self.repository
            .get_stats_by_code(code, RECENT_CLICKS_LIMIT)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockStatsRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_get_link_stats_success() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo
            .expect_get_stats_by_code()
            .withf(|code, limit| code == "abc123" && *limit == 5)
            .times(1)
            .returning(|_, _| {
                Ok(Some(LinkStats {
                    code: "abc123".to_string(),
                    total_clicks: 7,
                    recent_clicks: vec![
                        Click::new("10.0.0.1".to_string(), Utc::now()),
                        Click::new("10.0.0.2".to_string(), Utc::now()),
                    ],
                }))
            });

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_link_stats("abc123").await;

        assert!(result.is_ok());
        let stats = result.unwrap();
        assert_eq!(stats.total_clicks, 7);
        assert_eq!(stats.recent_clicks.len(), 2);
    }

    #[tokio::test]
    async fn test_get_link_stats_not_found() {
        let mut mock_repo = MockStatsRepository::new();

        mock_repo
            .expect_get_stats_by_code()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_link_stats("unknown-id").await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
