//! Controller for the update-category page.

use serde::Serialize;
use toolshelf_core::category::{
    validate_title, MSG_FETCH_FAILED, MSG_NOT_FOUND, MSG_UPDATED, MSG_UPDATE_FAILED,
};
use toolshelf_core::error::CoreError;
use toolshelf_core::submission::FormStatus;
use toolshelf_core::types::DocumentId;
use toolshelf_db::repositories::CategoryRepo;

/// Rendered state of the update-category page.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCategoryView {
    pub category_id: DocumentId,
    pub title: String,
    #[serde(flatten)]
    pub status: FormStatus,
    pub can_submit: bool,
}

pub struct UpdateCategoryController {
    repo: CategoryRepo,
    category_id: DocumentId,
    title: String,
    status: FormStatus,
    missing: bool,
}

impl UpdateCategoryController {
    pub fn new(repo: CategoryRepo, category_id: impl Into<DocumentId>) -> Self {
        Self {
            repo,
            category_id: category_id.into(),
            title: String::new(),
            status: FormStatus::default(),
            missing: false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Prefill the title from the stored category.
    pub async fn load(&mut self) {
        match self.repo.get_by_id(&self.category_id).await {
            Ok(category) => self.title = category.title,
            Err(err) if err.is_not_found() => {
                self.missing = true;
                self.status.report_error(MSG_NOT_FOUND);
            }
            Err(err) => {
                tracing::warn!(error = %err, category_id = %self.category_id, "Failed to fetch category");
                self.status.report_error(MSG_FETCH_FAILED);
            }
        }
    }

    /// Replace the stored title. Stays on the page with a success message.
    pub async fn submit(&mut self) {
        if let Err(CoreError::Validation(msg)) = validate_title(&self.title) {
            self.status.reject(msg);
            return;
        }

        self.status.begin();
        match self.repo.update(&self.category_id, &self.title).await {
            Ok(()) => {
                tracing::info!(category_id = %self.category_id, "Category updated");
                self.status.succeed(MSG_UPDATED);
            }
            Err(err) if err.is_not_found() => {
                self.missing = true;
                self.status.fail(MSG_NOT_FOUND);
            }
            Err(CoreError::Validation(msg)) => self.status.fail(msg),
            Err(err) => {
                tracing::warn!(error = %err, category_id = %self.category_id, "Failed to update category");
                self.status.fail(MSG_UPDATE_FAILED);
            }
        }
    }

    pub fn view(&self) -> UpdateCategoryView {
        UpdateCategoryView {
            category_id: self.category_id.clone(),
            title: self.title.clone(),
            status: self.status.clone(),
            can_submit: self.status.can_submit() && !self.missing,
        }
    }
}
