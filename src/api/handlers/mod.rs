//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod short_links;

pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, link_clicks_handler,
    list_links_handler,
};
pub use redirect::{deep_link_handler, short_link_handler};
pub use short_links::{
    create_short_link_handler, delete_short_link_handler, get_short_link_handler,
    list_short_links_handler,
};
