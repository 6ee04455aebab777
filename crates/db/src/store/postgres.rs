//! PostgreSQL-backed document store.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::FromRow;
use toolshelf_core::types::DocumentId;

use super::{Document, DocumentStore, Fields, StoreError};
use crate::DbPool;

/// A row from the `documents` table.
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    fields: Json<Fields>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            fields: row.fields.0,
        }
    }
}

/// Stores every collection in a single JSONB table keyed by
/// `(collection, id)`. Ids come from `gen_random_uuid()`.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Document, StoreError> {
        sqlx::query_as::<_, DocumentRow>(
            "SELECT id, fields FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(Document::from)
        .ok_or_else(|| StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        })
    }

    async fn list(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, fields FROM documents
             WHERE collection = $1
             ORDER BY created_at ASC, id ASC
             LIMIT $2",
        )
        .bind(collection)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn insert(&self, collection: &str, fields: Fields) -> Result<DocumentId, StoreError> {
        let id: String = sqlx::query_scalar(
            "INSERT INTO documents (collection, fields) VALUES ($1, $2) RETURNING id",
        )
        .bind(collection)
        .bind(Json(fields))
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO documents (collection, id, fields) VALUES ($1, $2, $3)
             ON CONFLICT (collection, id)
             DO UPDATE SET fields = EXCLUDED.fields, updated_at = now()",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(fields))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE documents SET fields = fields || $3, updated_at = now()
             WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(fields))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
