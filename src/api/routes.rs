//! Admin API route configuration.
//!
//! Guarded by [`crate::api::middleware::auth`] when an admin token is set.

use crate::api::handlers::{
    create_link_handler, create_short_link_handler, delete_link_handler,
    delete_short_link_handler, get_link_handler, get_short_link_handler, link_clicks_handler,
    list_links_handler, list_short_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All admin API routes.
///
/// # Endpoints
///
/// - `GET    /links`                - List deep links
/// - `POST   /links`                - Create a deep link
/// - `GET    /links/{code}`         - Show a deep link
/// - `DELETE /links/{code}`         - Delete a deep link
/// - `GET    /links/{code}/clicks`  - Recent click events
/// - `GET    /short-links`          - List short links
/// - `POST   /short-links`          - Shorten a URL
/// - `GET    /short-links/{id}`     - Show a short link
/// - `DELETE /short-links/{id}`     - Delete a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/links/{code}/clicks", get(link_clicks_handler))
        .route(
            "/short-links",
            get(list_short_links_handler).post(create_short_link_handler),
        )
        .route(
            "/short-links/{id}",
            get(get_short_link_handler).delete(delete_short_link_handler),
        )
}
