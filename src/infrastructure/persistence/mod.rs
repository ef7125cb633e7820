//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the Link Store traits using SQLx with bound
//! parameters.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Deep-link storage and retrieval
//! - [`PgShortLinkRepository`] - Shortened-link storage and retrieval
//! - [`PgClickRepository`] - Append-only click events

pub mod pg_click_repository;
pub mod pg_link_repository;
pub mod pg_short_link_repository;

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::LinkStore;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_short_link_repository::PgShortLinkRepository;

/// Builds a [`LinkStore`] whose collections all live in one PostgreSQL pool.
pub fn postgres_store(pool: Arc<PgPool>) -> LinkStore {
    LinkStore::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgShortLinkRepository::new(pool.clone())),
        Arc::new(PgClickRepository::new(pool)),
    )
}
