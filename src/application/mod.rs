//! Application layer services implementing business logic.
//!
//! Services consume repository traits from [`crate::domain::repositories`]
//! and provide the operations called by HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::DeepLinkService`] - Deep-link resolution and administration
//! - [`services::ShortLinkService`] - Short-link creation and resolution
//! - [`services::ClickLogger`] - Tolerant click event recording

pub mod services;
