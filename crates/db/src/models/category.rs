//! Category model.

use serde::{Deserialize, Serialize};
use toolshelf_core::category::FIELD_TITLE;
use toolshelf_core::types::DocumentId;

use crate::store::{Document, Fields, StoreError};

/// A document from the `categories` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: DocumentId,
    pub title: String,
}

/// Stored field layout. Missing fields decode as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryFields {
    title: String,
}

impl Category {
    pub(crate) fn from_document(doc: Document) -> Result<Self, StoreError> {
        let fields: CategoryFields = serde_json::from_value(doc.fields.into())?;
        Ok(Self {
            id: doc.id,
            title: fields.title,
        })
    }

    pub(crate) fn to_fields(title: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert(FIELD_TITLE.to_string(), title.into());
        fields
    }
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub title: String,
}

/// DTO for replacing a category's title.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub title: String,
}
