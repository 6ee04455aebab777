//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// List size parameter (`?limit=`). Clamped with
/// [`toolshelf_core::limits::clamp_limit`].
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// `?categoryId=` as passed to the update-category page.
#[derive(Debug, Deserialize)]
pub struct CategoryIdParam {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

/// `?toolId=` as passed to the update-tool page.
#[derive(Debug, Deserialize)]
pub struct ToolIdParam {
    #[serde(rename = "toolId")]
    pub tool_id: Option<String>,
}
