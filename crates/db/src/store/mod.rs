//! The document store contract consumed by the repositories.
//!
//! Documents are addressed by `collection/id` and carry a schema-less JSON
//! object of fields. Two implementations are provided:
//!
//! - [`PgDocumentStore`]: JSONB rows in PostgreSQL (production).
//! - [`MemoryDocumentStore`]: process-local maps (development and tests).

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use serde::Serialize;
use toolshelf_core::error::CoreError;
use toolshelf_core::types::DocumentId;

/// Field set of a single document.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A document read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document {collection}/{id} not found")]
    NotFound { collection: String, id: DocumentId },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Malformed document: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other transport or backend failure.
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Translate into the domain taxonomy, naming the entity for `NotFound`.
    pub fn into_core(self, entity: &'static str) -> CoreError {
        match self {
            StoreError::NotFound { id, .. } => CoreError::NotFound { entity, id },
            other => {
                tracing::error!(error = %other, entity, "Document store failure");
                CoreError::Store(other.to_string())
            }
        }
    }
}

/// Remote document database addressed by collection name and document id.
///
/// Each call is independent and atomic at the document level. There are no
/// transactions spanning documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document. Missing documents are [`StoreError::NotFound`].
    async fn get(&self, collection: &str, id: &str) -> Result<Document, StoreError>;

    /// Return at most `limit` documents of a collection, oldest first.
    async fn list(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError>;

    /// Insert a new document under a store-assigned unique id.
    async fn insert(&self, collection: &str, fields: Fields) -> Result<DocumentId, StoreError>;

    /// Create or fully overwrite the document at `id`.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    /// Merge `fields` into an existing document. Never creates one.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    /// Delete a document. Deleting a missing document is a no-op.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
