//! Collection-oriented document storage.
//!
//! Every entity lives as a JSON object inside a named collection and is
//! addressed by a string id assigned by the backend. The API is deliberately
//! narrow: full scans, point lookups, shallow merges and top-level equality
//! queries on stored values. Anything smarter (case-insensitive matching,
//! substring search) happens on the client side of this trait.

mod memory;
mod postgres;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, StorageError};

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Top-level fields of a stored document.
pub type Fields = Map<String, Value>;

pub mod collections {
    pub const EVENTS: &str = "events";
    pub const SPORTS: &str = "sports";
    pub const CITIES: &str = "cities";
    pub const AREAS: &str = "areas";
    pub const USERS: &str = "users";
    pub const LOGS: &str = "logs";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Fields) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Deserialize the document body into `T`, ignoring the id.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.data.clone()))?)
    }
}

/// Serialize `value` into top-level document fields.
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(StorageError::Backend(format!(
            "document body must be a JSON object, got {}",
            other
        ))),
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and return its backend-assigned id.
    async fn add(&self, collection: &str, data: Fields) -> Result<String>;

    /// Write a document under a caller-chosen id. With `merge` the fields are
    /// merged into an existing document instead of replacing it.
    async fn set(&self, collection: &str, id: &str, data: Fields, merge: bool) -> Result<()>;

    async fn get_all(&self, collection: &str) -> Result<Vec<Document>>;

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Shallow-merge `patch` into an existing document.
    /// Fails with [`StorageError::NotFound`] if the id does not exist.
    async fn update(&self, collection: &str, id: &str, patch: Fields) -> Result<()>;

    /// Remove a document. Removing a missing id is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// Documents whose top-level `field` equals `value` exactly.
    async fn query(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Document>>;
}
