use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{Document, DocumentStore, Fields};
use crate::error::{Result, StorageError};

/// Process-local document store. Used for local runs without Postgres and
/// as the backend of the test suites.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    fail_reads: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail with a backend error.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StorageError::Backend("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn add(&self, collection: &str, data: Fields) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), data));
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, data: Fields, merge: bool) -> Result<()> {
        let mut collections = self.collections.lock().await;
        let docs = collections.entry(collection.to_string()).or_default();

        match docs.iter_mut().find(|doc| doc.id == id) {
            Some(existing) if merge => existing.data.extend(data),
            Some(existing) => existing.data = data,
            None => docs.push(Document::new(id, data)),
        }

        Ok(())
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Document>> {
        self.check_reads()?;
        Ok(self
            .collections
            .lock()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.check_reads()?;
        Ok(self
            .collections
            .lock()
            .await
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned()))
    }

    async fn update(&self, collection: &str, id: &str, patch: Fields) -> Result<()> {
        let mut collections = self.collections.lock().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or(StorageError::NotFound)?;

        doc.data.extend(patch);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        if let Some(docs) = self.collections.lock().await.get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }

    async fn query(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Document>> {
        self.check_reads()?;
        Ok(self
            .collections
            .lock()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| doc.data.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
