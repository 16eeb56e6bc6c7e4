use axum::routing::get;
use axum::Router;

use crate::handlers::analysis;
use crate::state::AppState;

/// Routes mounted at `/analysis`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(analysis::pattern_summary))
}
