//! HTTP middleware for request processing and protection.
//!
//! Provides admin authentication and request tracing.

pub mod auth;
pub mod tracing;
