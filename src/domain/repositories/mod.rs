//! Repository trait definitions for the domain layer.
//!
//! These traits are the Link Store boundary. Concrete implementations live in
//! `crate::infrastructure`; mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Deep-link CRUD
//! - [`ShortLinkRepository`] - Shortened-link CRUD
//! - [`ClickRepository`] - Append-only click events

pub mod click_repository;
pub mod link_repository;
pub mod short_link_repository;

use std::sync::Arc;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;
pub use short_link_repository::ShortLinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;

/// Handle over the three collections of one storage backend.
///
/// Built once at startup and passed explicitly into the services.
#[derive(Clone)]
pub struct LinkStore {
    pub links: Arc<dyn LinkRepository>,
    pub short_links: Arc<dyn ShortLinkRepository>,
    pub clicks: Arc<dyn ClickRepository>,
}

impl LinkStore {
    pub fn new(
        links: Arc<dyn LinkRepository>,
        short_links: Arc<dyn ShortLinkRepository>,
        clicks: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            links,
            short_links,
            clicks,
        }
    }
}
