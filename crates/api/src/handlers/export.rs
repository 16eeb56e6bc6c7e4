//! Export downloads: display-ready rows as JSON or as a CSV attachment.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use matchtag_core::export::{build_export_rows, export_csv, export_filename};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/export
pub async fn export_json(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = build_export_rows(state.repo.as_ref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/export/csv
///
/// Served as an attachment named `video-tags-YYYY-MM-DD.csv` for the
/// current UTC date.
pub async fn export_csv_download(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = export_csv(state.repo.as_ref()).await?;
    let filename = export_filename(Utc::now().date_naive());

    tracing::info!(filename = %filename, bytes = csv.len(), "CSV export generated");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
