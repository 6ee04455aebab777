//! Category constants, validation and user-facing messages.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Storage layout
// ---------------------------------------------------------------------------

/// Document store collection holding categories.
pub const COLLECTION: &str = "categories";

/// Entity name used in `NotFound` errors.
pub const ENTITY: &str = "Category";

/// Stored field holding the category title.
pub const FIELD_TITLE: &str = "title";

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_ADDED: &str = "Category added successfully";
pub const MSG_UPDATED: &str = "Category updated successfully";
pub const MSG_DELETED: &str = "Category deleted";
pub const MSG_NOT_FOUND: &str = "Category not found";
pub const MSG_ADD_FAILED: &str = "An error occurred while adding the category";
pub const MSG_FETCH_FAILED: &str = "An error occurred while fetching the category";
pub const MSG_UPDATE_FAILED: &str = "An error occurred while updating the category";
pub const MSG_DELETE_FAILED: &str = "An error occurred while deleting the category";
pub const MSG_LIST_FAILED: &str = "An error occurred while loading categories";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a title shared by categories and tools.
///
/// Empty and whitespace-only titles are rejected. Accepted titles are stored
/// exactly as given.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(MSG_TITLE_REQUIRED.to_string()));
    }
    Ok(())
}
