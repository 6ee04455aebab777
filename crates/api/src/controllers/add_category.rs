//! Controller for the add-category page.

use serde::Serialize;
use toolshelf_core::category::{validate_title, MSG_ADDED, MSG_ADD_FAILED};
use toolshelf_core::error::CoreError;
use toolshelf_core::submission::FormStatus;
use toolshelf_db::repositories::CategoryRepo;

/// Rendered state of the add-category page.
#[derive(Debug, Clone, Serialize)]
pub struct AddCategoryView {
    pub title: String,
    #[serde(flatten)]
    pub status: FormStatus,
    pub can_submit: bool,
}

pub struct AddCategoryController {
    repo: CategoryRepo,
    title: String,
    status: FormStatus,
}

impl AddCategoryController {
    pub fn new(repo: CategoryRepo) -> Self {
        Self {
            repo,
            title: String::new(),
            status: FormStatus::default(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Validate and persist the category. On success the title input is
    /// cleared for the next entry.
    pub async fn submit(&mut self) {
        if let Err(CoreError::Validation(msg)) = validate_title(&self.title) {
            self.status.reject(msg);
            return;
        }

        self.status.begin();
        match self.repo.create(&self.title).await {
            Ok(id) => {
                tracing::info!(category_id = %id, "Category created");
                self.status.succeed(MSG_ADDED);
                self.title.clear();
            }
            Err(CoreError::Validation(msg)) => self.status.fail(msg),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to create category");
                self.status.fail(MSG_ADD_FAILED);
            }
        }
    }

    pub fn view(&self) -> AddCategoryView {
        AddCategoryView {
            title: self.title.clone(),
            status: self.status.clone(),
            can_submit: self.status.can_submit(),
        }
    }
}
