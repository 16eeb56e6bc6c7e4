pub mod analysis;
pub mod categories;
pub mod export;
pub mod health;
pub mod players;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories          category CRUD
/// /players             roster CRUD
/// /tags                tag CRUD
/// /export              JSON rows, CSV download
/// /analysis            pattern summary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/players", players::router())
        .nest("/tags", tags::router())
        .nest("/export", export::router())
        .nest("/analysis", analysis::router())
}
