//! Handlers for deep-link management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::clicks::{ClickInfo, ClicksQuery, ClicksResponse};
use crate::api::dto::links::{CreateLinkRequest, LinkListResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all deep links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.deep_link_service.list_links().await?;

    let items: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| LinkResponse::new(link, &state.settings.base_url))
        .collect();

    Ok(Json(LinkListResponse {
        total: items.len(),
        items,
    }))
}

/// Creates a deep link with a caller-chosen code.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "code": "summer-sale",
///   "ios_url": "myapp://promo/summer",      // optional
///   "android_url": "intent://promo/summer",  // optional
///   "fallback_url": "https://example.com/promo"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty, too long, contains `/` or
/// is reserved. Returns 409 Conflict if the code already exists.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.deep_link_service.create_link(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::new(link, &state.settings.base_url)),
    ))
}

/// Returns a single deep link.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.deep_link_service.get_link(&code).await?;

    Ok(Json(LinkResponse::new(link, &state.settings.base_url)))
}

/// Deletes a deep link. Recorded click events are kept.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// Returns 204 No Content whether or not the code existed.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.deep_link_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the most recent click events recorded for a code.
///
/// # Endpoint
///
/// `GET /api/links/{code}/clicks?limit=50`
///
/// Events are returned newest first. They are read from the click log only,
/// so events outlive the link they were recorded for.
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside `1..=500`.
pub async fn link_clicks_handler(
    Path(code): Path<String>,
    Query(query): Query<ClicksQuery>,
    State(state): State<AppState>,
) -> Result<Json<ClicksResponse>, AppError> {
    query.validate()?;

    let events = state.click_logger.recent(&code, query.limit()).await?;
    let items: Vec<ClickInfo> = events.into_iter().map(ClickInfo::from).collect();

    Ok(Json(ClicksResponse {
        code,
        total: items.len(),
        items,
    }))
}
