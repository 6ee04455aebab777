//! Repository for the `categories` collection.

use std::sync::Arc;

use toolshelf_core::category::{validate_title, COLLECTION, ENTITY};
use toolshelf_core::error::CoreError;
use toolshelf_core::types::DocumentId;

use super::ensure_positive;
use crate::models::category::Category;
use crate::store::DocumentStore;

/// Provides CRUD operations for categories.
#[derive(Clone)]
pub struct CategoryRepo {
    store: Arc<dyn DocumentStore>,
}

impl CategoryRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Persist a new category and return its store-assigned id.
    pub async fn create(&self, title: &str) -> Result<DocumentId, CoreError> {
        validate_title(title)?;
        let id = self
            .store
            .insert(COLLECTION, Category::to_fields(title))
            .await
            .map_err(|e| e.into_core(ENTITY))?;
        tracing::debug!(category_id = %id, "Category document inserted");
        Ok(id)
    }

    /// Fetch a category, failing with `NotFound` if it does not exist.
    pub async fn get_by_id(&self, id: &str) -> Result<Category, CoreError> {
        let doc = self
            .store
            .get(COLLECTION, id)
            .await
            .map_err(|e| e.into_core(ENTITY))?;
        Category::from_document(doc).map_err(|e| e.into_core(ENTITY))
    }

    /// Return up to `max_count` categories in store order.
    pub async fn list(&self, max_count: usize) -> Result<Vec<Category>, CoreError> {
        ensure_positive(max_count)?;
        let docs = self
            .store
            .list(COLLECTION, max_count)
            .await
            .map_err(|e| e.into_core(ENTITY))?;
        docs.into_iter()
            .map(|doc| Category::from_document(doc).map_err(|e| e.into_core(ENTITY)))
            .collect()
    }

    /// Replace the title. Missing ids surface as `NotFound` from the store.
    pub async fn update(&self, id: &str, title: &str) -> Result<(), CoreError> {
        validate_title(title)?;
        self.store
            .update(COLLECTION, id, Category::to_fields(title))
            .await
            .map_err(|e| e.into_core(ENTITY))
    }

    /// Delete a category. Tools referencing it are left untouched.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        self.store
            .delete(COLLECTION, id)
            .await
            .map_err(|e| e.into_core(ENTITY))
    }
}
