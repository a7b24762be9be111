use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{DocumentRecord, DocumentRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl DocumentRepository for SqliteRepository {
    async fn get_document(&self, key: &str) -> Result<Option<DocumentRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT key, body, updated_at
            FROM documents
            WHERE key = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let key: String = row
            .try_get("key")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let body: String = row
            .try_get("body")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let updated_at: DateTime<Utc> = row
            .try_get("updated_at")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        Ok(Some(DocumentRecord {
            key,
            body,
            updated_at,
        }))
    }

    async fn put_document(&self, record: &DocumentRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO documents (key, body, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&record.key)
        .bind(&record.body)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
