//! Shortened-link entity with a single destination.

use chrono::{DateTime, Utc};

/// A generated short identifier mapped to one destination URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a shortened link.
///
/// The `id` comes from the identifier generator, never from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub id: String,
    pub original_url: String,
}
