use std::sync::Arc;

use toolshelf_db::repositories::{CategoryRepo, ToolRepo};
use toolshelf_db::store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store shared by every repository.
    pub store: Arc<dyn DocumentStore>,
    pub categories: CategoryRepo,
    pub tools: ToolRepo,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state, injecting `store` into both repositories.
    pub fn new(store: Arc<dyn DocumentStore>, config: ServerConfig) -> Self {
        Self {
            categories: CategoryRepo::new(Arc::clone(&store)),
            tools: ToolRepo::new(Arc::clone(&store)),
            store,
            config: Arc::new(config),
        }
    }
}
