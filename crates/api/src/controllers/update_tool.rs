//! Controller for the update-tool page.

use serde::Serialize;
use toolshelf_core::category::validate_title;
use toolshelf_core::error::CoreError;
use toolshelf_core::submission::FormStatus;
use toolshelf_core::tool::{MSG_FETCH_FAILED, MSG_NOT_FOUND, MSG_UPDATED, MSG_UPDATE_FAILED};
use toolshelf_core::types::DocumentId;
use toolshelf_db::models::tool::UpdateTool;
use toolshelf_db::repositories::ToolRepo;

use super::HOME_PATH;

/// Rendered state of the update-tool page. The category is shown but not
/// editable here.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateToolView {
    pub tool_id: DocumentId,
    pub title: String,
    pub description: String,
    pub category_id: String,
    #[serde(flatten)]
    pub status: FormStatus,
    pub can_submit: bool,
    pub redirect: Option<String>,
}

pub struct UpdateToolController {
    repo: ToolRepo,
    tool_id: DocumentId,
    title: String,
    description: String,
    category_id: String,
    status: FormStatus,
    missing: bool,
    redirect: Option<String>,
}

impl UpdateToolController {
    pub fn new(repo: ToolRepo, tool_id: impl Into<DocumentId>) -> Self {
        Self {
            repo,
            tool_id: tool_id.into(),
            title: String::new(),
            description: String::new(),
            category_id: String::new(),
            status: FormStatus::default(),
            missing: false,
            redirect: None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Prefill the inputs from the stored tool.
    pub async fn load(&mut self) {
        match self.repo.get_by_id(&self.tool_id).await {
            Ok(tool) => {
                self.title = tool.title;
                self.description = tool.description;
                self.category_id = tool.category_id;
            }
            Err(err) if err.is_not_found() => {
                self.missing = true;
                self.status.report_error(MSG_NOT_FOUND);
            }
            Err(err) => {
                tracing::warn!(error = %err, tool_id = %self.tool_id, "Failed to fetch tool");
                self.status.report_error(MSG_FETCH_FAILED);
            }
        }
    }

    /// Save title and description, then navigate home.
    pub async fn submit(&mut self) {
        if let Err(CoreError::Validation(msg)) = validate_title(&self.title) {
            self.status.reject(msg);
            return;
        }

        self.status.begin();
        self.redirect = None;
        let input = UpdateTool {
            title: self.title.clone(),
            description: self.description.clone(),
        };
        match self.repo.update(&self.tool_id, &input).await {
            Ok(()) => {
                tracing::info!(tool_id = %self.tool_id, "Tool updated");
                self.status.succeed(MSG_UPDATED);
                self.redirect = Some(HOME_PATH.to_string());
            }
            Err(err) if err.is_not_found() => {
                self.missing = true;
                self.status.fail(MSG_NOT_FOUND);
            }
            Err(CoreError::Validation(msg)) => self.status.fail(msg),
            Err(err) => {
                tracing::warn!(error = %err, tool_id = %self.tool_id, "Failed to update tool");
                self.status.fail(MSG_UPDATE_FAILED);
            }
        }
    }

    pub fn view(&self) -> UpdateToolView {
        UpdateToolView {
            tool_id: self.tool_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category_id: self.category_id.clone(),
            status: self.status.clone(),
            can_submit: self.status.can_submit() && !self.missing,
            redirect: self.redirect.clone(),
        }
    }
}
