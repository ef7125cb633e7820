//! Repository trait for the append-only click event log.

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// Events carry no uniqueness constraint and are never updated or deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn append(&self, event: NewClickEvent) -> Result<(), AppError>;

    /// Returns up to `limit` most recent events for a code, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list_by_code(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError>;
}
