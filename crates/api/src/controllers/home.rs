//! Controller for the home page: lists categories and tools side by side
//! and deletes either.
//!
//! `loading` stays true until both initial fetches have resolved, whether
//! they succeed or fail. Every successful delete re-fetches the affected
//! list instead of removing the row locally.

use serde::Serialize;
use toolshelf_core::types::DocumentId;
use toolshelf_core::{category, tool};
use toolshelf_db::models::category::Category;
use toolshelf_db::models::tool::Tool;
use toolshelf_db::repositories::{CategoryRepo, ToolRepo};

use super::{update_category_path, update_tool_path};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub id: DocumentId,
    pub title: String,
    pub update_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolRow {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub update_path: String,
}

/// Rendered state of the home page.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub loading: bool,
    pub categories: Vec<CategoryRow>,
    pub tools: Vec<ToolRow>,
    pub error: Option<String>,
    pub message: Option<String>,
}

pub struct HomeController {
    categories_repo: CategoryRepo,
    tools_repo: ToolRepo,
    limit: usize,
    categories: Vec<Category>,
    tools: Vec<Tool>,
    categories_pending: bool,
    tools_pending: bool,
    error: Option<String>,
    message: Option<String>,
}

impl HomeController {
    pub fn new(categories_repo: CategoryRepo, tools_repo: ToolRepo, limit: usize) -> Self {
        Self {
            categories_repo,
            tools_repo,
            limit,
            categories: Vec::new(),
            tools: Vec::new(),
            categories_pending: true,
            tools_pending: true,
            error: None,
            message: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.categories_pending || self.tools_pending
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Initial fetch of both lists.
    pub async fn load(&mut self) {
        self.refresh_categories().await;
        self.refresh_tools().await;
    }

    /// Fetch whichever lists have not been fetched yet.
    pub async fn finish_loading(&mut self) {
        if self.categories_pending {
            self.refresh_categories().await;
        }
        if self.tools_pending {
            self.refresh_tools().await;
        }
    }

    /// Replace the held categories with the current store contents.
    pub async fn refresh_categories(&mut self) {
        match self.categories_repo.list(self.limit).await {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to list categories");
                self.report(category::MSG_LIST_FAILED);
            }
        }
        self.categories_pending = false;
    }

    /// Replace the held tools with the current store contents.
    pub async fn refresh_tools(&mut self) {
        match self.tools_repo.list(self.limit).await {
            Ok(tools) => self.tools = tools,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to list tools");
                self.report(tool::MSG_LIST_FAILED);
            }
        }
        self.tools_pending = false;
    }

    /// Record a fetch failure unless an earlier error is already shown.
    fn report(&mut self, error: &str) {
        if self.error.is_none() {
            self.error = Some(error.to_string());
        }
    }

    /// Delete a category, then re-fetch categories. Tools that reference it
    /// keep their dangling `category_id`.
    pub async fn delete_category(&mut self, id: &str) {
        self.error = None;
        self.message = None;
        match self.categories_repo.delete(id).await {
            Ok(()) => {
                tracing::info!(category_id = %id, "Category deleted");
                self.message = Some(category::MSG_DELETED.to_string());
                self.refresh_categories().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, category_id = %id, "Failed to delete category");
                self.error = Some(category::MSG_DELETE_FAILED.to_string());
            }
        }
    }

    /// Delete a tool, then re-fetch tools.
    pub async fn delete_tool(&mut self, id: &str) {
        self.error = None;
        self.message = None;
        match self.tools_repo.delete(id).await {
            Ok(()) => {
                tracing::info!(tool_id = %id, "Tool deleted");
                self.message = Some(tool::MSG_DELETED.to_string());
                self.refresh_tools().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, tool_id = %id, "Failed to delete tool");
                self.error = Some(tool::MSG_DELETE_FAILED.to_string());
            }
        }
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            loading: self.is_loading(),
            categories: self
                .categories
                .iter()
                .map(|c| CategoryRow {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    update_path: update_category_path(&c.id),
                })
                .collect(),
            tools: self
                .tools
                .iter()
                .map(|t| ToolRow {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    description: t.description.clone(),
                    category_id: t.category_id.clone(),
                    update_path: update_tool_path(&t.id),
                })
                .collect(),
            error: self.error.clone(),
            message: self.message.clone(),
        }
    }
}
