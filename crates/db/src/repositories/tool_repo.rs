//! Repository for the `tools` collection.

use std::sync::Arc;

use toolshelf_core::category::validate_title;
use toolshelf_core::error::CoreError;
use toolshelf_core::tool::{COLLECTION, ENTITY};
use toolshelf_core::types::DocumentId;

use super::ensure_positive;
use crate::models::tool::{CreateTool, Tool, UpdateTool};
use crate::store::DocumentStore;

/// Provides CRUD operations for tools.
#[derive(Clone)]
pub struct ToolRepo {
    store: Arc<dyn DocumentStore>,
}

impl ToolRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a new tool. The category reference is stored as given,
    /// including the empty string, without an existence check.
    pub async fn create(&self, input: &CreateTool) -> Result<DocumentId, CoreError> {
        validate_title(&input.title)?;
        let id = self
            .store
            .insert(COLLECTION, input.to_fields())
            .await
            .map_err(|e| e.into_core(ENTITY))?;
        tracing::debug!(tool_id = %id, category_id = %input.category_id, "Tool document inserted");
        Ok(id)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Tool, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await
            .map_err(|e| e.into_core(ENTITY))?;
        Tool::from_document(doc).map_err(|e| e.into_core(ENTITY))
    }

    pub async fn list(&self, max_count: usize) -> Result<Vec<Tool>, CoreError> {
        ensure_positive(max_count)?;
        let docs = self
            .store
            .list(COLLECTION, max_count)
            .await
            .map_err(|e| e.into_core(ENTITY))?;
        docs.into_iter()
            .map(|doc| Tool::from_document(doc).map_err(|e| e.into_core(ENTITY)))
            .collect()
    }

    /// Update `title` and `description` only; `categoryId` is preserved.
    pub async fn update(&self, id: &str, input: &UpdateTool) -> Result<(), CoreError> {
        validate_title(&input.title)?;
        self.store
            .update(COLLECTION, id, input.to_fields())
            .await
            .map_err(|e| e.into_core(ENTITY))
    }

    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.store
            .delete(COLLECTION, id)
            .await
            .map_err(|e| e.into_core(ENTITY))
    }
}
