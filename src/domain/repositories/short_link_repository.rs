//! Repository trait for shortened-link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened-link records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new shortened link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already taken. Callers
    /// holding a generated id should regenerate and retry.
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a shortened link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists all shortened links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<ShortLink>, AppError>;

    /// Deletes a shortened link. Missing ids yield `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
