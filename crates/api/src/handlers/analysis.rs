use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use matchtag_core::pattern::build_pattern_summary;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/analysis
///
/// Per-category and per-player tag counts.
pub async fn pattern_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = build_pattern_summary(state.repo.as_ref()).await?;
    Ok(Json(DataResponse { data: summary }))
}
