//! Infrastructure layer for external integrations.
//!
//! This layer implements the Link Store traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`memory`] - In-process store for local runs and tests

pub mod memory;
pub mod persistence;
