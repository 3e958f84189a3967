use serde_json::json;

use crate::error::{Result, StorageError};
use crate::models::City;
use crate::store::{DocumentStore, collections, to_fields};

pub struct CityRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CityRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<City>> {
        let docs = self.store.get_all(collections::CITIES).await?;
        docs.iter().map(City::from_document).collect()
    }

    pub async fn create(&self, name: &str) -> Result<City> {
        let mut city = City {
            id: String::new(),
            name: name.trim().to_string(),
        };
        city.id = self
            .store
            .add(collections::CITIES, to_fields(&city)?)
            .await?;
        Ok(city)
    }

    pub async fn rename(&self, id: &str, name: &str) -> Result<City> {
        let patch = to_fields(&json!({ "name": name.trim() }))?;
        self.store.update(collections::CITIES, id, patch).await?;

        self.store
            .get_by_id(collections::CITIES, id)
            .await?
            .ok_or(StorageError::NotFound)
            .and_then(|doc| City::from_document(&doc))
    }

    /// Remove a city. Areas and events naming it are left untouched.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(collections::CITIES, id).await
    }
}
