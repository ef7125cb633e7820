//! Deep-link entity with per-platform destinations.

use chrono::{DateTime, Utc};

use crate::domain::platform::Platform;

/// A deep link mapping one code to up to three destinations.
///
/// Records are created and deleted by administrative actions and are never
/// mutated in place. Destination fields are opaque strings; an empty string is
/// treated the same as an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub ios_url: Option<String>,
    pub android_url: Option<String>,
    pub fallback_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        ios_url: Option<String>,
        android_url: Option<String>,
        fallback_url: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            ios_url,
            android_url,
            fallback_url,
            created_at,
        }
    }

    /// Selects the destination for a platform class.
    ///
    /// The platform-specific field wins when it is non-empty. Otherwise the
    /// fallback is used; the other platform's field is never consulted.
    /// Returns `None` when the chosen field is empty.
    pub fn destination_for(&self, platform: Platform) -> Option<&str> {
        let specific = match platform {
            Platform::Ios => non_empty(self.ios_url.as_deref()),
            Platform::Android => non_empty(self.android_url.as_deref()),
            Platform::Other => None,
        };

        specific.or_else(|| non_empty(self.fallback_url.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Input data for creating a new deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub ios_url: Option<String>,
    pub android_url: Option<String>,
    pub fallback_url: Option<String>,
}
