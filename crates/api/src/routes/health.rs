use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::config::StorageBackend;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let storage = match state.config.storage {
        StorageBackend::Postgres { .. } => "postgres",
        StorageBackend::Memory => "memory",
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
