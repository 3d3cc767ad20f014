// src/db/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use tokio::sync::Mutex;

use super::DocumentStore;
use crate::errors::StorageError;

/// In-process store used by tests. Keeps insertion order per collection and
/// can simulate an outage or a write failure after a number of inserts.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    unavailable: bool,
    fail_inserts_after: Option<usize>,
    inserts: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails as if the server could not be reached.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Inserts succeed `n` times, then fail.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_inserts_after: Some(n),
            ..Self::default()
        }
    }

    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Backend("connection refused".to_string()));
        }
        Ok(())
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StorageError> {
        self.check_available()?;

        let mut inserts = self.inserts.lock().await;
        if self.fail_inserts_after.is_some_and(|n| *inserts >= n) {
            return Err(StorageError::Backend("write rejected".to_string()));
        }
        *inserts += 1;

        let oid = ObjectId::new();
        let mut stored = Document::new();
        stored.insert("_id", oid);
        stored.extend(document);
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        Ok(oid.to_hex())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        self.check_available()?;
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches(d, &filter))
                    .take(limit.max(0) as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count(&self, collection: &str, filter: Document) -> Result<u64, StorageError> {
        self.check_available()?;
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map_or(0, |docs| docs.iter().filter(|d| matches(d, &filter)).count() as u64))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        self.check_available()?;
        let mut names: Vec<String> = self.collections.lock().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
