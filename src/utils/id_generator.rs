//! Short identifier generation for shortened links.
//!
//! Identifiers are drawn from the URL-safe base64 alphabet (`A-Z`, `a-z`,
//! `0-9`, `-`, `_`). Each character encodes six bits from the OS CSPRNG, so
//! every character is uniformly distributed over the alphabet.

use base64::Engine as _;
use serde_json::json;

use crate::error::AppError;

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Shortest identifier length accepted by configuration.
pub const MIN_ID_LENGTH: usize = 4;

/// Longest identifier length accepted by configuration.
pub const MAX_ID_LENGTH: usize = 32;

/// Produces candidate identifiers for new shortened links.
///
/// Generators are not collision-aware. Callers treat a conflict on insert as
/// a signal to ask for another identifier.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the entropy source fails.
    fn generate(&self) -> Result<String, AppError>;
}

/// Cryptographically random fixed-length identifier generator.
#[derive(Debug, Clone, Copy)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Creates a generator for identifiers of `length` characters.
    ///
    /// The length is clamped to `MIN_ID_LENGTH..=MAX_ID_LENGTH`.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_ID_LENGTH, MAX_ID_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Result<String, AppError> {
        // ceil(length * 6 / 8) bytes yield at least `length` base64 characters
        let mut buffer = vec![0u8; (self.length * 6).div_ceil(8)];

        getrandom::fill(&mut buffer).map_err(|e| {
            AppError::internal(
                "Failed to generate random bytes",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let mut id = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
        id.truncate(self.length);

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-' || c == '_'
    }

    #[test]
    fn test_generate_default_length() {
        let id = RandomIdGenerator::default().generate().unwrap();
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
    }

    #[test]
    fn test_generate_custom_lengths() {
        for length in [4, 5, 7, 8, 11, 16, 32] {
            let id = RandomIdGenerator::new(length).generate().unwrap();
            assert_eq!(id.len(), length, "length {length}");
        }
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(RandomIdGenerator::new(0).length(), MIN_ID_LENGTH);
        assert_eq!(RandomIdGenerator::new(1000).length(), MAX_ID_LENGTH);
    }

    #[test]
    fn test_generate_url_safe_characters_without_padding() {
        let generator = RandomIdGenerator::default();
        for _ in 0..1000 {
            let id = generator.generate().unwrap();
            assert!(id.chars().all(is_url_safe), "unexpected character in {id}");
            assert!(!id.contains('='));
        }
    }

    #[test]
    fn test_generate_no_duplicates_over_ten_thousand_trials() {
        let generator = RandomIdGenerator::default();
        let mut ids = HashSet::new();

        for _ in 0..10_000 {
            let id = generator.generate().unwrap();
            assert_eq!(id.len(), DEFAULT_ID_LENGTH);
            ids.insert(id);
        }

        assert_eq!(ids.len(), 10_000);
    }
}
