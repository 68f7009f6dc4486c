//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an attempt to record a click against a stored link.
///
/// Returned by [`LinkRepository::record_click`] so the caller can map the
/// three lifecycle states (live, expired, absent) to its own error kinds.
#[derive(Debug, Clone)]
pub enum ClickOutcome {
    /// The link was live; the click was recorded. Carries the original URL.
    Followed(String),
    /// The link exists but is past its expiry; nothing was recorded.
    Expired,
    /// No link is stored under the given code.
    Missing,
}

/// Repository interface for managing short links.
///
/// Provides the keyed-store operations for shortened URLs. Implementations
/// must make `insert` an atomic check-and-insert and `record_click` an atomic
/// check-expiry-increment-append, so concurrent callers can never claim the
/// same code twice or desynchronize a link's click counter from its log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link under `new_link.code`.
    ///
    /// The existence check and the insert happen atomically. An expired but
    /// undeleted record still occupies its code and blocks reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// Returns `Ok(None)` if no record is stored under the code. Expiry is
    /// not evaluated here; callers decide what an expired record means.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Records a click for a live link and returns its original URL.
    ///
    /// The counter increment and the log append happen under a single
    /// critical section together with the expiry check, so an expired link is
    /// never clicked and `clicks` always equals the log length.
    async fn record_click(&self, code: &str, ip: &str) -> Result<ClickOutcome, AppError>;

    /// Removes a link, freeing its code for immediate reuse.
    ///
    /// Returns `Ok(true)` if the link was found and removed, `Ok(false)` if
    /// no record was stored under the code.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
