//! Shortened-link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::application::services::is_redirectable;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::IdGenerator;
use serde_json::json;
use tracing::{debug, info, warn};

/// Default number of identifiers tried before creation fails.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for generator-backed short links.
///
/// Short-link resolution does not record click events; only deep links do.
pub struct ShortLinkService {
    repository: Arc<dyn ShortLinkRepository>,
    generator: Arc<dyn IdGenerator>,
    max_attempts: usize,
}

impl ShortLinkService {
    /// Creates a new short-link service.
    ///
    /// `max_attempts` is raised to at least 1.
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        generator: Arc<dyn IdGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a shortened link with a generated identifier.
    ///
    /// # Collision Handling
    ///
    /// A [`AppError::Conflict`] from the store means the generated id is
    /// taken. A fresh id is generated and the insert retried, up to
    /// `max_attempts` inserts in total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    /// Returns [`AppError::Internal`] if every attempt collided or on store errors.
    pub async fn create_short_link(&self, original_url: String) -> Result<ShortLink, AppError> {
        if original_url.is_empty() {
            return Err(AppError::bad_request(
                "Original URL must not be empty",
                json!({ "field": "original_url" }),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let id = self.generator.generate()?;

            let new_link = NewShortLink {
                id: id.clone(),
                original_url: original_url.clone(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    info!(id = %link.id, attempt, "Short link created");
                    return Ok(link);
                }
                Err(e) if e.is_conflict() => {
                    warn!(id = %id, attempt, "Generated short link id collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short link id",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short link id to its destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    /// Returns [`AppError::NoDestination`] if the stored URL is empty or not a
    /// valid header value.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))?;

        if link.original_url.is_empty() || !is_redirectable(&link.original_url) {
            return Err(AppError::no_destination(
                "Original URL not found",
                json!({ "id": id }),
            ));
        }

        debug!(id, "Short link resolved");
        Ok(link.original_url)
    }

    /// Retrieves a short link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is unknown.
    pub async fn get_short_link(&self, id: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "id": id })))
    }

    /// Lists all short links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_short_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list().await
    }

    /// Deletes a short link. Deleting a missing id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_short_link(&self, id: &str) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            info!(id, "Short link deleted");
        }
        Ok(())
    }
}
