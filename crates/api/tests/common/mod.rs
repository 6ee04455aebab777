#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use toolshelf_api::config::ServerConfig;
use toolshelf_api::router::build_app_router;
use toolshelf_api::state::AppState;
use toolshelf_core::types::DocumentId;
use toolshelf_db::store::{Document, DocumentStore, Fields, MemoryDocumentStore, StoreError};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        list_limit: 10,
        category_options_limit: 100,
    }
}

pub fn test_state(store: Arc<dyn DocumentStore>) -> AppState {
    AppState::new(store, test_config())
}

/// Build the full application router over `store`, with the same
/// middleware stack as production.
pub fn build_test_app(store: Arc<dyn DocumentStore>) -> Router {
    build_app_router(test_state(store))
}

pub fn memory_store() -> Arc<dyn DocumentStore> {
    Arc::new(MemoryDocumentStore::new())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// Wraps a memory store and counts every call that reaches it.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryDocumentStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Document, StoreError> {
        self.hit();
        self.inner.get(collection, id).await
    }

    async fn list(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError> {
        self.hit();
        self.inner.list(collection, limit).await
    }

    async fn insert(&self, collection: &str, fields: Fields) -> Result<DocumentId, StoreError> {
        self.hit();
        self.inner.insert(collection, fields).await
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.hit();
        self.inner.set(collection, id, fields).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.hit();
        self.inner.update(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.hit();
        self.inner.delete(collection, id).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.inner.ping().await
    }
}

/// A store whose backend is always unreachable.
pub struct FailingStore;

fn unreachable_backend() -> StoreError {
    StoreError::Backend("connection refused".to_string())
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _: &str, _: &str) -> Result<Document, StoreError> {
        Err(unreachable_backend())
    }

    async fn list(&self, _: &str, _: usize) -> Result<Vec<Document>, StoreError> {
        Err(unreachable_backend())
    }

    async fn insert(&self, _: &str, _: Fields) -> Result<DocumentId, StoreError> {
        Err(unreachable_backend())
    }

    async fn set(&self, _: &str, _: &str, _: Fields) -> Result<(), StoreError> {
        Err(unreachable_backend())
    }

    async fn update(&self, _: &str, _: &str, _: Fields) -> Result<(), StoreError> {
        Err(unreachable_backend())
    }

    async fn delete(&self, _: &str, _: &str) -> Result<(), StoreError> {
        Err(unreachable_backend())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(unreachable_backend())
    }
}
