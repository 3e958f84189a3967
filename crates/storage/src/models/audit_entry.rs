use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One line of the `logs` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub user_id: Option<String>,
    pub action: String,
    pub details: Value,
    pub ts: String,
}
