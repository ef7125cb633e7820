//! Deep-link resolution and administration service.

use std::sync::Arc;

use crate::application::services::ClickLogger;
use crate::application::services::is_redirectable;
use crate::domain::entities::{Link, NewClickEvent, NewLink};
use crate::domain::platform::{Platform, PlatformDetector};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;
use tracing::{debug, info, warn};

/// A resolved deep-link redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub url: String,
    pub platform: Platform,
}

/// Resolves deep-link codes to platform-specific destinations.
///
/// Also exposes the create/list/delete passthroughs used by the admin surface.
pub struct DeepLinkService {
    repository: Arc<dyn LinkRepository>,
    detector: PlatformDetector,
    click_logger: Arc<ClickLogger>,
}

impl DeepLinkService {
    /// Creates a new deep-link service.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        detector: PlatformDetector,
        click_logger: Arc<ClickLogger>,
    ) -> Self {
        Self {
            repository,
            detector,
            click_logger,
        }
    }

    /// Resolves a code for a client.
    ///
    /// # Steps
    ///
    /// 1. Look up the link by code
    /// 2. Classify the client signature
    /// 3. Select the platform destination, falling back to `fallback_url`
    /// 4. Append a click event carrying the signature and address verbatim
    ///
    /// The click event is only appended after a destination was determined.
    /// A failed append does not affect the result. A destination that cannot be
    /// sent as a `Location` header (control characters) counts as no
    /// destination, so no event is appended for a redirect that cannot happen.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::NoDestination`] if the selected destination is empty
    /// or not a valid header value.
    /// Returns [`AppError::Internal`] on store errors during lookup.
    pub async fn resolve(
        &self,
        code: &str,
        client_signature: &str,
        source_ip: &str,
    ) -> Result<RedirectTarget, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                debug!(code, "Deep link miss");
                AppError::not_found("No link found", json!({ "code": code }))
            })?;

        let platform = self.detector.classify(client_signature);

        let url = link
            .destination_for(platform)
            .map(str::to_string)
            .ok_or_else(|| {
                debug!(code, ?platform, "Deep link has no destination for platform");
                AppError::no_destination("No redirect URL found", json!({ "code": code }))
            })?;

        if !is_redirectable(&url) {
            warn!(code, ?platform, "Stored destination is not a valid Location header");
            return Err(AppError::no_destination(
                "Redirect URL is not a valid header value",
                json!({ "code": code }),
            ));
        }

        self.click_logger
            .record(NewClickEvent::new(code, client_signature, source_ip))
            .await;

        info!(code, ?platform, "Deep link resolved");

        Ok(RedirectTarget { url, platform })
    }

    /// Retrieves a link by code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("No link found", json!({ "code": code })))
    }

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Creates a link with a caller-supplied code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        let code = new_link.code.clone();
        let link = self.repository.create(new_link).await.map_err(|e| {
            if e.is_conflict() {
                AppError::conflict("Link code already exists", json!({ "code": code }))
            } else {
                e
            }
        })?;

        info!(code = %link.code, "Deep link created");
        Ok(link)
    }

    /// Deletes a link. Deleting a missing code is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if self.repository.delete(code).await? {
            info!(code, "Deep link deleted");
        } else {
            debug!(code, "Delete of missing deep link ignored");
        }
        Ok(())
    }

    /// Checks store reachability.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use chrono::Utc;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8)";
    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    fn create_test_link(code: &str, ios: &str, android: &str, fallback: &str) -> Link {
        Link::new(
            code.to_string(),
            Some(ios.to_string()),
            Some(android.to_string()),
            Some(fallback.to_string()),
            Utc::now(),
        )
    }

    fn service(links: MockLinkRepository, clicks: MockClickRepository) -> DeepLinkService {
        DeepLinkService::new(
            Arc::new(links),
            PlatformDetector::default(),
            Arc::new(ClickLogger::new(Arc::new(clicks))),
        )
    }

    fn links_returning(link: Link) -> MockLinkRepository {
        let mut mock = MockLinkRepository::new();
        mock.expect_find_by_code()
            .returning(move |_| Ok(Some(link.clone())));
        mock
    }

    #[tokio::test]
    async fn test_resolve_ios_returns_ios_url_and_logs_click() {
        let links = links_returning(create_test_link(
            "xyz",
            "https://i.example",
            "https://a.example",
            "https://f.example",
        ));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_append()
            .withf(|e| e.code == "xyz" && e.user_agent == IPHONE_UA && e.ip == "198.51.100.4")
            .times(1)
            .returning(|_| Ok(()));

        let target = service(links, clicks)
            .resolve("xyz", IPHONE_UA, "198.51.100.4")
            .await
            .unwrap();

        assert_eq!(target.url, "https://i.example");
        assert_eq!(target.platform, Platform::Ios);
    }

    #[tokio::test]
    async fn test_resolve_android_returns_android_url() {
        let links = links_returning(create_test_link(
            "xyz",
            "https://i.example",
            "https://a.example",
            "https://f.example",
        ));
        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(1).returning(|_| Ok(()));

        let target = service(links, clicks)
            .resolve("xyz", ANDROID_UA, "")
            .await
            .unwrap();

        assert_eq!(target.url, "https://a.example");
    }

    #[tokio::test]
    async fn test_resolve_other_platform_returns_fallback() {
        let links = links_returning(create_test_link(
            "xyz",
            "https://i.example",
            "https://a.example",
            "https://f.example",
        ));
        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(1).returning(|_| Ok(()));

        let target = service(links, clicks)
            .resolve("xyz", DESKTOP_UA, "")
            .await
            .unwrap();

        assert_eq!(target.url, "https://f.example");
        assert_eq!(target.platform, Platform::Other);
    }

    #[tokio::test]
    async fn test_resolve_android_with_empty_android_url_uses_fallback() {
        let links = links_returning(create_test_link("abc", "ios://x", "", "https://f.example"));
        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(1).returning(|_| Ok(()));

        let target = service(links, clicks)
            .resolve("abc", ANDROID_UA, "")
            .await
            .unwrap();

        assert_eq!(target.url, "https://f.example");
    }

    #[tokio::test]
    async fn test_resolve_ios_with_empty_ios_url_never_uses_android_url() {
        let links = links_returning(create_test_link(
            "abc",
            "",
            "https://a.example",
            "https://f.example",
        ));
        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(1).returning(|_| Ok(()));

        let target = service(links, clicks)
            .resolve("abc", IPHONE_UA, "")
            .await
            .unwrap();

        assert_eq!(target.url, "https://f.example");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code_is_not_found_without_click() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_code().times(1).returning(|_| Ok(None));

        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(0);

        let result = service(links, clicks)
            .resolve("missing", IPHONE_UA, "")
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "No link found");
    }

    #[tokio::test]
    async fn test_resolve_empty_destination_is_no_destination_without_click() {
        let links = links_returning(create_test_link("abc", "ios://x", "", ""));

        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(0);

        let err = service(links, clicks)
            .resolve("abc", ANDROID_UA, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NoDestination { .. }));
        assert_eq!(err.to_string(), "No redirect URL found");
    }

    #[tokio::test]
    async fn test_resolve_header_invalid_destination_is_no_destination_without_click() {
        let links = links_returning(create_test_link(
            "abc",
            "ios://x",
            "",
            "https://f.example/\nLocation: https://evil.example",
        ));

        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(0);

        let err = service(links, clicks)
            .resolve("abc", DESKTOP_UA, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NoDestination { .. }));
    }

    #[tokio::test]
    async fn test_resolve_survives_click_append_failure() {
        let links = links_returning(create_test_link("abc", "", "", "https://f.example"));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_append()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let target = service(links, clicks)
            .resolve("abc", DESKTOP_UA, "")
            .await
            .unwrap();

        assert_eq!(target.url, "https://f.example");
    }

    #[tokio::test]
    async fn test_resolve_propagates_lookup_failure() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_code()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let mut clicks = MockClickRepository::new();
        clicks.expect_append().times(0);

        let err = service(links, clicks)
            .resolve("abc", DESKTOP_UA, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_link_conflict_is_reported() {
        let mut links = MockLinkRepository::new();
        links
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let err = service(links, MockClickRepository::new())
            .create_link(NewLink {
                code: "taken".to_string(),
                ios_url: None,
                android_url: None,
                fallback_url: Some("https://f.example".to_string()),
            })
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Link code already exists");
    }

    #[tokio::test]
    async fn test_delete_missing_link_is_ok() {
        let mut links = MockLinkRepository::new();
        links
            .expect_delete()
            .withf(|code| code == "ghost")
            .times(1)
            .returning(|_| Ok(false));

        let result = service(links, MockClickRepository::new())
            .delete_link("ghost")
            .await;

        assert!(result.is_ok());
    }
}
