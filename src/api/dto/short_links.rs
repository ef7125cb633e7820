//! DTOs for shortened-link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL. The id is always generated.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortLinkRequest {
    #[validate(length(min = 1, message = "Original URL must not be empty"))]
    pub original_url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLinkResponse {
    pub fn new(link: ShortLink, short_url: String) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_url,
            created_at: link.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShortLinkListResponse {
    pub total: usize,
    pub items: Vec<ShortLinkResponse>,
}
