//! DTOs for deep-link administration endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Link, NewLink};

/// First path segments already taken by other routes.
pub const RESERVED_CODES: [&str; 3] = ["api", "health", "s"];

/// Request to create a deep link.
///
/// Destinations are opaque strings (custom schemes such as `myapp://` are
/// allowed). An omitted or empty destination falls through to `fallback_url`
/// at resolution time.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, max = 64), custom(function = "validate_code"))]
    pub code: String,

    pub ios_url: Option<String>,
    pub android_url: Option<String>,
    pub fallback_url: Option<String>,
}

impl From<CreateLinkRequest> for NewLink {
    fn from(req: CreateLinkRequest) -> Self {
        NewLink {
            code: req.code,
            ios_url: req.ios_url,
            android_url: req.android_url,
            fallback_url: req.fallback_url,
        }
    }
}

fn validate_code(code: &str) -> Result<(), ValidationError> {
    if code.contains('/') {
        return Err(ValidationError::new("code_contains_slash")
            .with_message("Code must not contain '/'".into()));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(ValidationError::new("code_reserved")
            .with_message("Code is reserved by another route".into()));
    }

    Ok(())
}

/// JSON representation of a deep link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub url: String,
    pub ios_url: Option<String>,
    pub android_url: Option<String>,
    pub fallback_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    /// Builds the response, with `url` being the public redirect address.
    pub fn new(link: Link, base_url: &str) -> Self {
        Self {
            url: format!("{}/{}", base_url.trim_end_matches('/'), link.code),
            code: link.code,
            ios_url: link.ios_url,
            android_url: link.android_url,
            fallback_url: link.fallback_url,
            created_at: link.created_at,
        }
    }
}

/// List of deep links, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: &str) -> CreateLinkRequest {
        CreateLinkRequest {
            code: code.to_string(),
            ios_url: None,
            android_url: None,
            fallback_url: Some("https://example.com".to_string()),
        }
    }

    #[test]
    fn test_valid_code() {
        assert!(request("summer-sale_2025").validate().is_ok());
    }

    #[test]
    fn test_empty_code_rejected() {
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_long_code_rejected() {
        assert!(request(&"a".repeat(65)).validate().is_err());
        assert!(request(&"a".repeat(64)).validate().is_ok());
    }

    #[test]
    fn test_slash_rejected() {
        assert!(request("a/b").validate().is_err());
    }

    #[test]
    fn test_reserved_codes_rejected() {
        for code in RESERVED_CODES {
            assert!(request(code).validate().is_err(), "{code} accepted");
        }
    }
}
