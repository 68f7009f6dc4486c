//! In-memory implementation of the link and stats repositories.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::{ClickOutcome, LinkRepository, LinkStats, StatsRepository};
use crate::error::AppError;

/// Process-local keyed store of short links.
///
/// A coarse-grained `RwLock` around the whole map serializes mutations:
/// check-and-insert, increment-then-append, and removal each run under one
/// write guard, read-only lookups take the read guard. No guard is ever held
/// across an `.await`, so the std lock is safe inside async trait methods.
///
/// All state is lost on process restart; the service accepts that.
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Link>>, AppError> {
        self.links
            .read()
            .map_err(|_| AppError::internal("Link store lock poisoned", json!({})))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Link>>, AppError> {
        self.links
            .write()
            .map_err(|_| AppError::internal("Link store lock poisoned", json!({})))
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.write_guard()?;

        match links.entry(new_link.code) {
            Entry::Occupied(entry) => Err(AppError::conflict(
                "Alias already in use",
                json!({ "target": "alias-input", "code": entry.key() }),
            )),
            Entry::Vacant(entry) => {
                let link = Link::new(
                    entry.key().clone(),
                    new_link.original_url,
                    Utc::now(),
                    new_link.expires_at,
                );
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.read_guard()?;

        Ok(links.get(code).cloned())
    }

    async fn record_click(&self, code: &str, ip: &str) -> Result<ClickOutcome, AppError> {
        let mut links = self.write_guard()?;

        let Some(link) = links.get_mut(code) else {
            return Ok(ClickOutcome::Missing);
        };

        if link.is_expired() {
            return Ok(ClickOutcome::Expired);
        }

        link.clicks += 1;
        link.access_log.push(Click::new(ip.to_string(), Utc::now()));

        Ok(ClickOutcome::Followed(link.original_url.clone()))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut links = self.write_guard()?;

        Ok(links.remove(code).is_some())
    }
}

#[async_trait]
impl StatsRepository for MemoryLinkRepository {
    async fn get_stats_by_code(
        &self,
        code: &str,
        limit: usize,
    ) -> Result<Option<LinkStats>, AppError> {
        let links = self.read_guard()?;

        Ok(links.get(code).map(|link| {
            let start = link.access_log.len().saturating_sub(limit);
            LinkStats {
                code: link.code.clone(),
                total_clicks: link.clicks,
                recent_clicks: link.access_log[start..].to_vec(),
            }
        }))
    }
}
