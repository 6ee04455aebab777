use crate::types::DocumentId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: DocumentId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Transport or backend failure reported by the document store.
    #[error("Store error: {0}")]
    Store(String),
}

impl CoreError {
    /// Returns `true` for [`CoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}
