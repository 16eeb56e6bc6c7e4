use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`.
///
/// ```text
/// GET /       -> export_json
/// GET /csv    -> export_csv_download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(export::export_json))
        .route("/csv", get(export::export_csv_download))
}
