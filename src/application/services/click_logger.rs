//! Click event recording.

use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use tracing::{debug, warn};

/// Maximum number of events returned by [`ClickLogger::recent`].
pub const MAX_RECENT_CLICKS: i64 = 500;

/// Appends click events for successful deep-link redirects.
///
/// Append failures are logged and swallowed: a redirect that has already been
/// determined must never turn into an error because logging failed.
pub struct ClickLogger {
    repository: Arc<dyn ClickRepository>,
}

impl ClickLogger {
    /// Creates a new click logger.
    pub fn new(repository: Arc<dyn ClickRepository>) -> Self {
        Self { repository }
    }

    /// Records one click event, tolerating store failures.
    pub async fn record(&self, event: NewClickEvent) {
        let code = event.code.clone();

        match self.repository.append(event).await {
            Ok(()) => debug!(code = %code, "Click event recorded"),
            Err(e) => warn!(code = %code, error = %e, "Failed to record click event"),
        }
    }

    /// Returns the most recent raw events for a code, newest first.
    ///
    /// `limit` is clamped to `1..=MAX_RECENT_CLICKS`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn recent(&self, code: &str, limit: i64) -> Result<Vec<ClickEvent>, AppError> {
        self.repository
            .list_by_code(code, limit.clamp(1, MAX_RECENT_CLICKS))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockClickRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_record_passes_event_verbatim() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_append()
            .withf(|e| e.code == "xyz" && e.user_agent == "UA/1.0" && e.ip == "1.2.3.4")
            .times(1)
            .returning(|_| Ok(()));

        let logger = ClickLogger::new(Arc::new(mock_repo));
        logger
            .record(NewClickEvent::new("xyz", "UA/1.0", "1.2.3.4"))
            .await;
    }

    #[tokio::test]
    async fn test_record_swallows_store_errors() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_append()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let logger = ClickLogger::new(Arc::new(mock_repo));
        logger.record(NewClickEvent::new("xyz", "", "")).await;
    }

    #[tokio::test]
    async fn test_recent_clamps_limit() {
        let mut mock_repo = MockClickRepository::new();
        mock_repo
            .expect_list_by_code()
            .withf(|code, limit| code == "xyz" && *limit == MAX_RECENT_CLICKS)
            .times(1)
            .returning(|_, _| Ok(vec![]));
        mock_repo
            .expect_list_by_code()
            .withf(|_, limit| *limit == 1)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let logger = ClickLogger::new(Arc::new(mock_repo));

        assert!(logger.recent("xyz", 10_000).await.unwrap().is_empty());
        assert!(logger.recent("xyz", 0).await.unwrap().is_empty());
    }
}
