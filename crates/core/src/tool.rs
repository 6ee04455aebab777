//! Tool constants and user-facing messages.
//!
//! Tools share title validation with categories
//! ([`crate::category::validate_title`]). The description may be empty and
//! the category reference is never checked for existence.

pub const COLLECTION: &str = "tools";

pub const ENTITY: &str = "Tool";

pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_CATEGORY_ID: &str = "categoryId";

pub const MSG_ADDED: &str = "Tool added successfully";
pub const MSG_UPDATED: &str = "Tool updated successfully";
pub const MSG_DELETED: &str = "Tool deleted";
pub const MSG_NOT_FOUND: &str = "Tool not found";
pub const MSG_ADD_FAILED: &str = "An error occurred while adding the tool";
pub const MSG_FETCH_FAILED: &str = "An error occurred while fetching the tool";
pub const MSG_UPDATE_FAILED: &str = "An error occurred while updating the tool";
pub const MSG_DELETE_FAILED: &str = "An error occurred while deleting the tool";
pub const MSG_LIST_FAILED: &str = "An error occurred while loading tools";
