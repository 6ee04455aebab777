//! Controller for the add-tool page.

use serde::Serialize;
use toolshelf_core::category::{self, validate_title};
use toolshelf_core::error::CoreError;
use toolshelf_core::submission::FormStatus;
use toolshelf_core::tool::{MSG_ADDED, MSG_ADD_FAILED};
use toolshelf_db::models::category::Category;
use toolshelf_db::models::tool::CreateTool;
use toolshelf_db::repositories::{CategoryRepo, ToolRepo};

use super::HOME_PATH;

/// Rendered state of the add-tool page.
#[derive(Debug, Clone, Serialize)]
pub struct AddToolView {
    pub title: String,
    pub description: String,
    pub category_id: String,
    /// Categories offered in the selector. Choosing one is optional.
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub status: FormStatus,
    pub can_submit: bool,
    pub redirect: Option<String>,
}

pub struct AddToolController {
    tools: ToolRepo,
    categories: CategoryRepo,
    title: String,
    description: String,
    category_id: String,
    options: Vec<Category>,
    status: FormStatus,
    redirect: Option<String>,
}

impl AddToolController {
    pub fn new(tools: ToolRepo, categories: CategoryRepo) -> Self {
        Self {
            tools,
            categories,
            title: String::new(),
            description: String::new(),
            category_id: String::new(),
            options: Vec::new(),
            status: FormStatus::default(),
            redirect: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category_id(&mut self, category_id: impl Into<String>) {
        self.category_id = category_id.into();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Fetch the categories offered in the selector.
    pub async fn load_categories(&mut self, limit: usize) {
        match self.categories.list(limit).await {
            Ok(options) => self.options = options,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load category options");
                self.status.report_error(category::MSG_LIST_FAILED);
            }
        }
    }

    /// Validate and persist the tool, then navigate home.
    pub async fn submit(&mut self) {
        if let Err(CoreError::Validation(msg)) = validate_title(&self.title) {
            self.status.reject(msg);
            return;
        }

        self.status.begin();
        self.redirect = None;
        let input = CreateTool {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category_id.clone(),
        };
        match self.tools.create(&input).await {
            Ok(id) => {
                tracing::info!(tool_id = %id, category_id = %input.category_id, "Tool created");
                self.status.succeed(MSG_ADDED);
                self.title.clear();
                self.description.clear();
                self.category_id.clear();
                self.redirect = Some(HOME_PATH.to_string());
            }
            Err(CoreError::Validation(msg)) => self.status.fail(msg),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to create tool");
                self.status.fail(MSG_ADD_FAILED);
            }
        }
    }

    pub fn view(&self) -> AddToolView {
        AddToolView {
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category_id.clone(),
            categories: self.options.clone(),
            status: self.status.clone(),
            can_submit: self.status.can_submit(),
            redirect: self.redirect.clone(),
        }
    }
}
