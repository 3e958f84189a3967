use serde_json::Value;

use crate::error::Result;
use crate::models::Area;
use crate::store::{DocumentStore, collections, to_fields};

pub struct AreaRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> AreaRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Areas registered under `city_id` (exact, case-sensitive match)
    pub async fn list_for_city(&self, city_id: &str) -> Result<Vec<Area>> {
        let docs = self
            .store
            .query(collections::AREAS, "cityId", &Value::String(city_id.to_string()))
            .await?;
        docs.iter().map(Area::from_document).collect()
    }

    pub async fn create(&self, city_id: &str, name: &str) -> Result<Area> {
        let mut area = Area {
            id: String::new(),
            city_id: city_id.to_string(),
            name: name.trim().to_string(),
        };
        area.id = self
            .store
            .add(collections::AREAS, to_fields(&area)?)
            .await?;
        Ok(area)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(collections::AREAS, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::city::CityRepository;
    use crate::store::MemoryDocumentStore;

    #[tokio::test]
    async fn test_areas_are_listed_per_city() {
        let store = MemoryDocumentStore::new();
        let cities = CityRepository::new(&store);
        let areas = AreaRepository::new(&store);

        let pune = cities.create("Pune").await.unwrap();
        let mumbai = cities.create("Mumbai").await.unwrap();
        areas.create(&pune.id, "Kothrud").await.unwrap();
        areas.create(&pune.id, " Baner").await.unwrap();
        areas.create(&mumbai.id, "Andheri").await.unwrap();

        let names: Vec<String> = areas
            .list_for_city(&pune.id)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Kothrud", "Baner"]);
    }

    #[tokio::test]
    async fn test_deleting_city_keeps_its_areas() {
        let store = MemoryDocumentStore::new();
        let cities = CityRepository::new(&store);
        let areas = AreaRepository::new(&store);

        let pune = cities.create("Pune").await.unwrap();
        areas.create(&pune.id, "Kothrud").await.unwrap();
        cities.delete(&pune.id).await.unwrap();

        assert!(cities.list().await.unwrap().is_empty());
        assert_eq!(areas.list_for_city(&pune.id).await.unwrap().len(), 1);
    }
}
