use std::sync::Arc;

use matchtag_core::repository::Repository;

use crate::config::ServerConfig;

/// Shared application state available to all handlers via axum's `State`.
///
/// Cloned per request; both fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// The active store, in-memory or Postgres.
    pub repo: Arc<dyn Repository>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository>, config: ServerConfig) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }
}
