#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use matchtag_api::config::{ServerConfig, StorageBackend};
use matchtag_api::router::build_app_router;
use matchtag_api::state::AppState;
use matchtag_core::memory::MemoryRepository;
use tower::ServiceExt;

/// Build a test `ServerConfig` backed by the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageBackend::Memory,
    }
}

/// Router over an empty store, plus the store handle so a test can build
/// several routers that share state.
pub fn build_test_app() -> (Router, Arc<MemoryRepository>) {
    let repo = Arc::new(MemoryRepository::empty());
    (app_for(&repo), repo)
}

/// Router over a store seeded with the default categories and players.
pub fn build_seeded_app() -> (Router, Arc<MemoryRepository>) {
    let repo = Arc::new(MemoryRepository::seeded());
    (app_for(&repo), repo)
}

pub fn app_for(repo: &Arc<MemoryRepository>) -> Router {
    let state = AppState::new(repo.clone(), test_config());
    build_app_router(state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: &str, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Create a category and return its id.
pub async fn create_category(repo: &Arc<MemoryRepository>, name: &str) -> String {
    let response = post_json(
        app_for(repo),
        "/api/v1/categories",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a player and return its id.
pub async fn create_player(repo: &Arc<MemoryRepository>, name: &str, number: i64) -> String {
    let response = post_json(
        app_for(repo),
        "/api/v1/players",
        serde_json::json!({ "name": name, "number": number }),
    )
    .await;
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}
