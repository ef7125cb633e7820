//! Handlers for shortened-link management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::short_links::{
    CreateShortLinkRequest, ShortLinkListResponse, ShortLinkResponse,
};
use crate::domain::entities::ShortLink;
use crate::error::AppError;
use crate::state::AppState;

fn to_response(state: &AppState, link: ShortLink) -> ShortLinkResponse {
    let short_url = state.settings.short_url(&link.id);
    ShortLinkResponse::new(link, short_url)
}

/// Shortens a URL under a generated id.
///
/// # Endpoint
///
/// `POST /api/short-links`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/a/very/long/path" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `original_url` is empty.
/// Returns 500 if no free id was found within the configured attempts.
pub async fn create_short_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortLinkRequest>,
) -> Result<(StatusCode, Json<ShortLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .short_link_service
        .create_short_link(payload.original_url)
        .await?;

    Ok((StatusCode::CREATED, Json(to_response(&state, link))))
}

/// Lists all short links, newest first.
///
/// # Endpoint
///
/// `GET /api/short-links`
pub async fn list_short_links_handler(
    State(state): State<AppState>,
) -> Result<Json<ShortLinkListResponse>, AppError> {
    let links = state.short_link_service.list_short_links().await?;

    let items: Vec<ShortLinkResponse> = links
        .into_iter()
        .map(|link| to_response(&state, link))
        .collect();

    Ok(Json(ShortLinkListResponse {
        total: items.len(),
        items,
    }))
}

/// `GET /api/short-links/{id}`
pub async fn get_short_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let link = state.short_link_service.get_short_link(&id).await?;

    Ok(Json(to_response(&state, link)))
}

/// `DELETE /api/short-links/{id}`, 204 whether or not the id existed.
pub async fn delete_short_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.short_link_service.delete_short_link(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
