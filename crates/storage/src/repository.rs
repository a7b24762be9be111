use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A JSON document stored under a fixed key.
///
/// Storage never looks inside `body`; decoding and merging with defaults is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub key: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

impl DocumentRecord {
    #[must_use]
    pub fn new(key: impl Into<String>, body: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            body: body.into(),
            updated_at,
        }
    }
}

/// Repository contract for keyed documents.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Fetch the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_document(&self, key: &str) -> Result<Option<DocumentRecord>, StorageError>;

    /// Insert or replace the document under `record.key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be stored.
    async fn put_document(&self, record: &DocumentRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    documents: Arc<Mutex<HashMap<String, DocumentRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn get_document(&self, key: &str) -> Result<Option<DocumentRecord>, StorageError> {
        let guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_document(&self, record: &DocumentRecord) -> Result<(), StorageError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.key.clone(), record.clone());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub documents: Arc<dyn DocumentRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let documents: Arc<dyn DocumentRepository> = Arc::new(InMemoryRepository::new());
        Self { documents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_document("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_previous_body() {
        let repo = InMemoryRepository::new();
        repo.put_document(&DocumentRecord::new("k", "{}", at(0)))
            .await
            .unwrap();
        repo.put_document(&DocumentRecord::new("k", r#"{"voiceOn":false}"#, at(5)))
            .await
            .unwrap();

        let fetched = repo.get_document("k").await.unwrap().unwrap();
        assert_eq!(fetched.body, r#"{"voiceOn":false}"#);
        assert_eq!(fetched.updated_at - at(0), Duration::seconds(5));
    }

    #[tokio::test]
    async fn storage_handles_share_the_backend() {
        let storage = Storage::in_memory();
        let clone = storage.clone();
        storage
            .documents
            .put_document(&DocumentRecord::new("k", "1", at(0)))
            .await
            .unwrap();
        assert!(clone.documents.get_document("k").await.unwrap().is_some());
    }
}
