//! Business logic services for the application layer.

pub mod click_logger;
pub mod deep_link_service;
pub mod short_link_service;

pub use click_logger::ClickLogger;
pub use deep_link_service::{DeepLinkService, RedirectTarget};
pub use short_link_service::ShortLinkService;

/// Whether a destination can be sent back as a `Location` header value.
pub(crate) fn is_redirectable(url: &str) -> bool {
    axum::http::HeaderValue::from_str(url).is_ok()
}
