//! Link creation, resolution, inspection, and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{ClickOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_alias};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Upper bound on random code generation retries.
///
/// A near-full 6-hex-char keyspace is an accepted degradation, but the retry
/// loop is bounded so exhaustion surfaces as an explicit error instead of
/// spinning forever.
const MAX_ATTEMPTS: usize = 100;

/// Service for the short link lifecycle.
///
/// Owns the policy side of the registry: input validation, alias rules, code
/// generation with collision retry, and the expiry contract applied by read
/// paths. The atomic storage steps live behind [`LinkRepository`].
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The original URL; stored opaquely, only presence is checked
    /// - `alias` - Optional caller-chosen short code (used verbatim; empty treated as absent)
    /// - `expires_at` - Optional expiry instant; `None` means the link never expires
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty or the
    /// alias exceeds 20 characters.
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken, even by
    /// an expired link that was never deleted.
    pub async fn create_short_link(
        &self,
        original_url: String,
        alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "The originalUrl field is required",
                json!({ "target": "url-input" }),
            ));
        }

        let alias = alias.filter(|a| !a.is_empty());

        if let Some(alias) = alias {
            validate_alias(&alias)?;

            return self
                .repository
                .insert(NewLink {
                    code: alias,
                    original_url,
                    expires_at,
                })
                .await;
        }

        self.create_with_generated_code(original_url, expires_at)
            .await
    }

    /// Resolves a short code to its original URL, recording the click.
    ///
    /// Every successful resolution mutates state: the click counter and the
    /// access log advance together inside the repository's critical section.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Gone`] for a known code at or past its expiry.
    pub async fn resolve(&self, code: &str, ip: &str) -> Result<String, AppError> {
        match self.repository.record_click(code, ip).await? {
            ClickOutcome::Followed(url) => Ok(url),
            ClickOutcome::Expired => Err(AppError::gone(
                "Short link has expired",
                json!({ "code": code }),
            )),
            ClickOutcome::Missing => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    /// Retrieves a link by its short code without recording a click.
    ///
    /// Applies the same expiry rules as [`Self::resolve`] but produces no
    /// mutation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] / [`AppError::Gone`] as for resolve.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        if link.is_expired() {
            return Err(AppError::gone(
                "Short link has expired",
                json!({ "code": code }),
            ));
        }

        Ok(link)
    }

    /// Deletes a link, making its code immediately available for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link is stored under the code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    /// Generates a unique 6-hex-char code with collision retry.
    ///
    /// Attempts up to [`MAX_ATTEMPTS`] times before failing. The insert is
    /// the collision check: a conflict from the repository means another
    /// caller holds the candidate code.
    async fn create_with_generated_code(
        &self,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            match self
                .repository
                .insert(NewLink {
                    code,
                    original_url: original_url.clone(),
                    expires_at,
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
