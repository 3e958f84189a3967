use serde_json::json;

use crate::error::{Result, StorageError};
use crate::models::Sport;
use crate::store::{DocumentStore, collections, to_fields};

pub struct SportRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> SportRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Sport>> {
        let docs = self.store.get_all(collections::SPORTS).await?;
        docs.iter().map(Sport::from_document).collect()
    }

    pub async fn create(&self, name: &str) -> Result<Sport> {
        let mut sport = Sport {
            id: String::new(),
            name: name.trim().to_string(),
        };
        sport.id = self
            .store
            .add(collections::SPORTS, to_fields(&sport)?)
            .await?;
        Ok(sport)
    }

    pub async fn rename(&self, id: &str, name: &str) -> Result<Sport> {
        let name = name.trim();
        let patch = to_fields(&json!({ "name": name }))?;
        self.store.update(collections::SPORTS, id, patch).await?;

        self.store
            .get_by_id(collections::SPORTS, id)
            .await?
            .ok_or(StorageError::NotFound)
            .and_then(|doc| Sport::from_document(&doc))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(collections::SPORTS, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryDocumentStore;

    #[tokio::test]
    async fn test_create_rename_delete() {
        let store = MemoryDocumentStore::new();
        let repo = SportRepository::new(&store);

        let sport = repo.create("  Cricket ").await.unwrap();
        assert_eq!(sport.name, "Cricket");

        let renamed = repo.rename(&sport.id, "Box cricket").await.unwrap();
        assert_eq!(renamed.name, "Box cricket");
        assert_eq!(repo.list().await.unwrap(), vec![renamed]);

        repo.delete(&sport.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rename_missing_sport_is_not_found() {
        let store = MemoryDocumentStore::new();
        let repo = SportRepository::new(&store);
        assert!(repo.rename("nope", "Chess").await.unwrap_err().is_not_found());
    }
}
