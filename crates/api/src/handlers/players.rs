//! Handlers for the player roster.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use matchtag_core::error::CoreError;
use matchtag_core::player::{CreatePlayer, UpdatePlayer};
use matchtag_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/players
pub async fn list_players(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let players = state.repo.list_players().await?;
    Ok(Json(DataResponse { data: players }))
}

/// POST /api/v1/players
pub async fn create_player(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePlayer>,
) -> AppResult<impl IntoResponse> {
    let player = state.repo.create_player(&input).await?;

    tracing::info!(player_id = %player.id, number = player.number, "Player created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: player })))
}

/// PUT /api/v1/players/{id}
pub async fn update_player(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(input): ApiJson<UpdatePlayer>,
) -> AppResult<impl IntoResponse> {
    let player = state.repo.update_player(id, &input).await?;

    tracing::info!(player_id = %id, "Player updated");

    Ok(Json(DataResponse { data: player }))
}

/// DELETE /api/v1/players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
) -> AppResult<StatusCode> {
    if !state.repo.delete_player(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Player",
            id,
        }));
    }

    tracing::info!(player_id = %id, "Player deleted");

    Ok(StatusCode::NO_CONTENT)
}
