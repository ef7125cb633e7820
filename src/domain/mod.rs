//! Domain layer containing business entities and the platform rule.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer.
//!
//! - [`entities`] - Link, shortened-link and click-event data structures
//! - [`platform`] - Client platform classification
//! - [`repositories`] - Link Store trait definitions
//!
//! # Deep-Link Resolution Flow
//!
//! 1. Look up the [`entities::Link`] by code
//! 2. Classify the client signature with [`platform::PlatformDetector`]
//! 3. Select a destination via [`entities::Link::destination_for`]
//! 4. Append a [`entities::NewClickEvent`] on success only

pub mod entities;
pub mod platform;
pub mod repositories;
