//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Link`] - A deep link with iOS, Android and fallback destinations
//! - [`ShortLink`] - A generated identifier mapped to one destination
//! - [`ClickEvent`] - An append-only record of a successful deep-link redirect
//!
//! Creation inputs live in separate structs (`NewLink`, `NewShortLink`,
//! `NewClickEvent`) because store-assigned fields such as `created_at` are
//! never supplied by callers.

pub mod click;
pub mod link;
pub mod short_link;

pub use click::{ClickEvent, NewClickEvent};
pub use link::{Link, NewLink};
pub use short_link::{NewShortLink, ShortLink};
