//! Handlers for deep-link and short-link redirects.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::api::extractors::ClientInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a deep-link code to the destination for the caller's platform.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Classify the `User-Agent` as iOS, Android or other
/// 2. Pick `ios_url` / `android_url`, falling back to `fallback_url`
/// 3. Append a click event (user agent and client address, verbatim)
/// 4. Return 307 Temporary Redirect
///
/// The click event is written before the response is sent, so it is visible
/// to `GET /api/links/{code}/clicks` as soon as the redirect arrives. A failed
/// write is logged and does not change the response.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown (`not_found`) or the link has
/// no usable destination for this platform (`no_destination`).
pub async fn deep_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    client: ClientInfo,
) -> Result<impl IntoResponse, AppError> {
    let target = state
        .deep_link_service
        .resolve(&code, &client.user_agent, &client.ip)
        .await?;

    Ok(Redirect::temporary(&target.url))
}

/// Redirects a generated short id to its original URL.
///
/// # Endpoint
///
/// `GET /s/{id}`
///
/// No click event is recorded for short links.
///
/// # Errors
///
/// Returns 404 Not Found if the id is unknown or its URL is empty.
pub async fn short_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.short_link_service.resolve(&id).await?;
    debug!(id = %id, "Redirecting short link");

    Ok(Redirect::temporary(&url))
}
