//! Handlers for timestamped video tags.
//!
//! `playerIds` is accepted either as a JSON array or as a single
//! comma-delimited string; both are normalized by the core before storage.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use matchtag_core::error::CoreError;
use matchtag_core::tag::{CreateTag, UpdateTag};
use matchtag_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
///
/// All tags, ascending by video timestamp.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = state.repo.list_tags().await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
) -> AppResult<impl IntoResponse> {
    let tag = state.repo.get_tag(id).await?;
    Ok(Json(DataResponse { data: tag }))
}

/// POST /api/v1/tags
pub async fn create_tag(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = state.repo.create_tag(&input).await?;

    tracing::info!(
        tag_id = %tag.id,
        category_id = %tag.category_id,
        timestamp = tag.timestamp,
        players = tag.player_ids.len(),
        "Tag created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// PUT /api/v1/tags/{id}
///
/// Partial update; `createdAt` never changes.
pub async fn update_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(input): ApiJson<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = state.repo.update_tag(id, &input).await?;

    tracing::info!(tag_id = %id, "Tag updated");

    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /api/v1/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
) -> AppResult<StatusCode> {
    if !state.repo.delete_tag(id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }

    tracing::info!(tag_id = %id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}
