use serde::{Deserialize, Serialize};

use super::string_or_empty;
use crate::error::Result;
use crate::store::Document;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
pub const DEFAULT_SKILL_LEVEL: &str = "casual";

/// Profile document stored under the user's id in `users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub display_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub skill_level: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub created_at: String,
}

impl UserProfile {
    pub fn new(uid: impl Into<String>, email: Option<String>, created_at: String) -> Self {
        Self {
            uid: uid.into(),
            email,
            role: ROLE_USER.to_string(),
            display_name: String::new(),
            skill_level: DEFAULT_SKILL_LEVEL.to_string(),
            created_at,
        }
    }

    pub fn from_document(doc: &Document) -> Result<Self> {
        let mut profile: UserProfile = doc.decode()?;
        if profile.uid.is_empty() {
            profile.uid = doc.id.clone();
        }
        Ok(profile)
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
