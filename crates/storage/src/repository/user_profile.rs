use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::dto::profile::UpdateProfileRequest;
use crate::error::{Result, StorageError};
use crate::models::UserProfile;
use crate::store::{DocumentStore, Fields, collections, to_fields};

pub struct UserProfileRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> UserProfileRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn find(&self, uid: &str) -> Result<Option<UserProfile>> {
        self.store
            .get_by_id(collections::USERS, uid)
            .await?
            .map(|doc| UserProfile::from_document(&doc))
            .transpose()
    }

    /// Return the profile for `uid`, creating a default one if none exists.
    /// An existing profile (and its role) is never overwritten.
    pub async fn ensure(&self, uid: &str, email: Option<&str>) -> Result<UserProfile> {
        if let Some(profile) = self.find(uid).await? {
            return Ok(profile);
        }

        let profile = UserProfile::new(
            uid,
            email.map(str::to_string),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        self.store
            .set(collections::USERS, uid, to_fields(&profile)?, false)
            .await?;

        tracing::info!(uid, "created user profile");
        Ok(profile)
    }

    /// Merge editable profile fields, creating the profile first if needed
    pub async fn update(&self, uid: &str, req: &UpdateProfileRequest) -> Result<UserProfile> {
        self.ensure(uid, req.email.as_deref()).await?;

        let mut patch = Fields::new();
        if let Some(email) = &req.email {
            patch.insert("email".into(), Value::String(email.trim().to_string()));
        }
        if let Some(display_name) = &req.display_name {
            patch.insert(
                "displayName".into(),
                Value::String(display_name.trim().to_string()),
            );
        }
        if let Some(skill_level) = &req.skill_level {
            patch.insert(
                "skillLevel".into(),
                Value::String(skill_level.trim().to_string()),
            );
        }

        if !patch.is_empty() {
            self.store.set(collections::USERS, uid, patch, true).await?;
        }

        self.find(uid).await?.ok_or(StorageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user_profile::{DEFAULT_SKILL_LEVEL, ROLE_ADMIN, ROLE_USER};
    use crate::store::MemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_ensure_creates_default_profile_once() {
        let store = MemoryDocumentStore::new();
        let repo = UserProfileRepository::new(&store);

        let profile = repo.ensure("u1", Some("asha@example.com")).await.unwrap();
        assert_eq!(profile.uid, "u1");
        assert_eq!(profile.role, ROLE_USER);
        assert_eq!(profile.skill_level, DEFAULT_SKILL_LEVEL);

        let again = repo.ensure("u1", None).await.unwrap();
        assert_eq!(again, profile);
    }

    #[tokio::test]
    async fn test_update_preserves_role() {
        let store = MemoryDocumentStore::new();
        store
            .set(
                collections::USERS,
                "root",
                to_fields(&json!({"uid": "root", "role": ROLE_ADMIN})).unwrap(),
                false,
            )
            .await
            .unwrap();

        let repo = UserProfileRepository::new(&store);
        let updated = repo
            .update(
                "root",
                &UpdateProfileRequest {
                    display_name: Some(" Root ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.is_admin());
        assert_eq!(updated.display_name, "Root");
    }
}
