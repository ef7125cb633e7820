//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ClickEvent;

/// Default number of events returned when `limit` is omitted.
pub const DEFAULT_CLICK_LIMIT: i64 = 50;

/// Query parameters for `GET /api/links/{code}/clicks`.
#[derive(Debug, Deserialize, Validate)]
pub struct ClicksQuery {
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,
}

impl ClicksQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_CLICK_LIMIT)
    }
}

/// Individual click event, exactly as recorded.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub id: i64,
    pub user_agent: String,
    pub ip: String,
    pub clicked_at: DateTime<Utc>,
}

impl From<ClickEvent> for ClickInfo {
    fn from(event: ClickEvent) -> Self {
        Self {
            id: event.id,
            user_agent: event.user_agent,
            ip: event.ip,
            clicked_at: event.created_at,
        }
    }
}

/// Most recent click events for a code, newest first.
#[derive(Debug, Serialize)]
pub struct ClicksResponse {
    pub code: String,
    pub total: usize,
    pub items: Vec<ClickInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        let query = ClicksQuery { limit: None };
        assert!(query.validate().is_ok());
        assert_eq!(query.limit(), DEFAULT_CLICK_LIMIT);
    }

    #[test]
    fn test_limit_bounds() {
        assert!(ClicksQuery { limit: Some(0) }.validate().is_err());
        assert!(ClicksQuery { limit: Some(501) }.validate().is_err());
        assert!(ClicksQuery { limit: Some(500) }.validate().is_ok());
    }
}
