//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Short identifier generation for shortened links
//! - [`client_ip`] - Source address extraction from HTTP requests

pub mod client_ip;
pub mod id_generator;
