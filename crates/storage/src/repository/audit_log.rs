use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::models::AuditEntry;
use crate::store::{DocumentStore, collections, to_fields};

/// Append-only record of user actions in the `logs` collection.
pub struct AuditLog<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> AuditLog<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Record an action. Failures are logged and never reach the caller.
    pub async fn record(&self, user_id: Option<&str>, action: &str, details: Value) {
        tracing::info!(user_id, action, %details, "audit");

        let entry = AuditEntry {
            user_id: user_id.map(str::to_string),
            action: action.to_string(),
            details,
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let result = match to_fields(&entry) {
            Ok(fields) => self.store.add(collections::LOGS, fields).await.map(|_| ()),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            tracing::error!(action, error = %e, "failed to write audit entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_record_appends_entry() {
        let store = MemoryDocumentStore::new();
        AuditLog::new(&store)
            .record(Some("u1"), "add_event", json!({"id": "e1", "name": "Run"}))
            .await;

        let logs = store.get_all(collections::LOGS).await.unwrap();
        assert_eq!(logs.len(), 1);

        let entry: AuditEntry = logs[0].decode().unwrap();
        assert_eq!(entry.user_id.as_deref(), Some("u1"));
        assert_eq!(entry.action, "add_event");
        assert_eq!(entry.details["id"], "e1");
    }

    #[tokio::test]
    async fn test_record_without_user() {
        let store = MemoryDocumentStore::new();
        AuditLog::new(&store).record(None, "logout", json!({})).await;

        let entry: AuditEntry = store.get_all(collections::LOGS).await.unwrap()[0]
            .decode()
            .unwrap();
        assert!(entry.user_id.is_none());
    }
}
