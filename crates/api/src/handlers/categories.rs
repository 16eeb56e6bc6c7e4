//! Handlers for tag categories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use matchtag_core::category::{CreateCategory, UpdateCategory};
use matchtag_core::error::CoreError;
use matchtag_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.repo.list_categories().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
///
/// Names are trimmed; a name already in use is rejected with 409.
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.repo.create_category(&input).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(input): ApiJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.repo.update_category(id, &input).await?;

    tracing::info!(category_id = %id, name = %category.name, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Tags that still reference the category keep their dangling id.
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<EntityId>,
) -> AppResult<StatusCode> {
    if !state.repo.delete_category(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = %id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
