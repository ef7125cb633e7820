//! Client platform classification from a raw client signature.
//!
//! Classification is a pure function over an immutable pattern set built once
//! from [`PlatformRules`]. Tokens are literal substrings matched anywhere in
//! the signature, ignoring ASCII and Unicode case.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Coarse client category derived from a client signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Other,
}

/// Token lists used to recognise each platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRules {
    pub ios_tokens: Vec<String>,
    pub android_tokens: Vec<String>,
}

impl Default for PlatformRules {
    fn default() -> Self {
        Self {
            ios_tokens: vec!["iphone".into(), "ipad".into(), "ipod".into()],
            android_tokens: vec!["android".into()],
        }
    }
}

/// Compiled classifier for client signatures.
///
/// iOS is evaluated before Android, so a signature carrying tokens of both
/// classifies as [`Platform::Ios`]. An empty token list disables its class.
#[derive(Debug, Clone)]
pub struct PlatformDetector {
    ios: Option<Regex>,
    android: Option<Regex>,
}

impl PlatformDetector {
    /// Compiles the token lists into case-insensitive matchers.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the combined pattern exceeds the regex
    /// engine's size limits.
    pub fn new(rules: &PlatformRules) -> Result<Self, regex::Error> {
        Ok(Self {
            ios: compile(&rules.ios_tokens)?,
            android: compile(&rules.android_tokens)?,
        })
    }

    /// Classifies a client signature.
    pub fn classify(&self, signature: &str) -> Platform {
        if matches(self.ios.as_ref(), signature) {
            Platform::Ios
        } else if matches(self.android.as_ref(), signature) {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}

impl Default for PlatformDetector {
    fn default() -> Self {
        let rules = PlatformRules::default();
        Self {
            ios: compile(&rules.ios_tokens).ok().flatten(),
            android: compile(&rules.android_tokens).ok().flatten(),
        }
    }
}

fn compile(tokens: &[String]) -> Result<Option<Regex>, regex::Error> {
    let escaped: Vec<String> = tokens
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(regex::escape)
        .collect();

    if escaped.is_empty() {
        return Ok(None);
    }

    RegexBuilder::new(&escaped.join("|"))
        .case_insensitive(true)
        .build()
        .map(Some)
}

fn matches(pattern: Option<&Regex>, signature: &str) -> bool {
    pattern.is_some_and(|p| p.is_match(signature))
}
