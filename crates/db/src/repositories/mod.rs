//! Repository layer.
//!
//! Each repository wraps an injected [`DocumentStore`](crate::store::DocumentStore)
//! and translates entity operations into document calls. Errors are returned
//! as [`CoreError`] and never swallowed.

pub mod category_repo;
pub mod tool_repo;

pub use category_repo::CategoryRepo;
pub use tool_repo::ToolRepo;

use toolshelf_core::error::CoreError;

/// Reject a zero list size before reaching the store.
fn ensure_positive(max_count: usize) -> Result<(), CoreError> {
    if max_count == 0 {
        return Err(CoreError::Validation(
            "List limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
