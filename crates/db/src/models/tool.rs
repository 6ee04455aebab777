//! Tool model.

use serde::{Deserialize, Serialize};
use toolshelf_core::tool::{FIELD_CATEGORY_ID, FIELD_DESCRIPTION, FIELD_TITLE};
use toolshelf_core::types::DocumentId;

use crate::store::{Document, Fields, StoreError};

/// A document from the `tools` collection.
///
/// `category_id` may be empty or reference a category that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub category_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ToolFields {
    title: String,
    description: String,
    category_id: String,
}

impl Tool {
    pub(crate) fn from_document(doc: Document) -> Result<Self, StoreError> {
        let fields: ToolFields = serde_json::from_value(doc.fields.into())?;
        Ok(Self {
            id: doc.id,
            title: fields.title,
            description: fields.description,
            category_id: fields.category_id,
        })
    }
}

/// DTO for creating a new tool.
#[derive(Debug, Deserialize)]
pub struct CreateTool {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "categoryId")]
    pub category_id: String,
}

impl CreateTool {
    pub(crate) fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(FIELD_TITLE.to_string(), self.title.as_str().into());
        fields.insert(FIELD_DESCRIPTION.to_string(), self.description.as_str().into());
        fields.insert(FIELD_CATEGORY_ID.to_string(), self.category_id.as_str().into());
        fields
    }
}

/// DTO for editing a tool. The category reference is not editable.
#[derive(Debug, Deserialize)]
pub struct UpdateTool {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl UpdateTool {
    pub(crate) fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(FIELD_TITLE.to_string(), self.title.as_str().into());
        fields.insert(FIELD_DESCRIPTION.to_string(), self.description.as_str().into());
        fields
    }
}
