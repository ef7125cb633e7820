//! Click event entity recorded on each successful deep-link redirect.

use chrono::{DateTime, Utc};

/// An immutable record of one successful deep-link resolution.
///
/// `code` references a [`crate::domain::entities::Link`] by value only, so
/// events survive deletion of the link they point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub id: i64,
    pub code: String,
    pub user_agent: String,
    pub ip: String,
    pub created_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a new ClickEvent instance.
    pub fn new(
        id: i64,
        code: String,
        user_agent: String,
        ip: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            user_agent,
            ip,
            created_at,
        }
    }
}

/// Input data for appending a click event.
///
/// The client signature and source address are stored verbatim; either may be
/// empty. The timestamp is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClickEvent {
    pub code: String,
    pub user_agent: String,
    pub ip: String,
}

impl NewClickEvent {
    pub fn new(code: impl Into<String>, user_agent: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            user_agent: user_agent.into(),
            ip: ip.into(),
        }
    }
}
