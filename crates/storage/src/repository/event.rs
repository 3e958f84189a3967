use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::{Event, trim_location};
use crate::store::{DocumentStore, Fields, collections, to_fields};

pub struct EventRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> EventRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Every stored event, in whatever order the backend returns them
    pub async fn list(&self) -> Result<Vec<Event>> {
        let docs = self.store.get_all(collections::EVENTS).await?;
        docs.iter().map(Event::from_document).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        self.store
            .get_by_id(collections::EVENTS, id)
            .await?
            .map(|doc| Event::from_document(&doc))
            .transpose()
    }

    /// Persist a new event. City and area are trimmed; their case is kept
    /// for display.
    pub async fn create(&self, req: &CreateEventRequest, created_by: &str) -> Result<Event> {
        let mut event = Event {
            id: String::new(),
            name: req.name.clone(),
            sport: req.sport.clone(),
            city: trim_location(&req.city).to_string(),
            area: trim_location(&req.area).to_string(),
            date: req.date.clone(),
            desc: req.desc.clone(),
            created_by: created_by.to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        event.id = self
            .store
            .add(collections::EVENTS, to_fields(&event)?)
            .await?;

        Ok(event)
    }

    /// Merge the supplied fields into an existing event
    pub async fn update(&self, id: &str, req: &UpdateEventRequest) -> Result<Event> {
        let patch = update_patch(req);

        self.store.update(collections::EVENTS, id, patch).await?;

        // A concurrent delete can remove the record between the two calls
        self.find_by_id(id).await?.ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(collections::EVENTS, id).await
    }
}

fn update_patch(req: &UpdateEventRequest) -> Fields {
    let mut patch = Fields::new();

    let mut put = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            patch.insert(key.to_string(), Value::String(value));
        }
    };

    put("name", req.name.clone());
    put("sport", req.sport.clone());
    put("city", req.city.as_deref().map(|c| trim_location(c).to_string()));
    put("area", req.area.as_deref().map(|a| trim_location(a).to_string()));
    put("date", req.date.clone());

    match &req.desc {
        Some(Some(desc)) => {
            patch.insert("desc".to_string(), Value::String(desc.clone()));
        }
        Some(None) => {
            patch.insert("desc".to_string(), Value::Null);
        }
        None => {}
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryDocumentStore;

    fn request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Evening doubles".into(),
            sport: "Badminton".into(),
            city: "  Pune ".into(),
            area: "Kothrud".into(),
            date: "2025-05-04T18:00".into(),
            desc: Some("Bring shuttles".into()),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemoryDocumentStore::new();
        let repo = EventRepository::new(&store);

        let created = repo.create(&request(), "user-1").await.unwrap();
        let fetched = repo.find_by_id(&created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Evening doubles");
        assert_eq!(fetched.city, "Pune");
        assert_eq!(fetched.area, "Kothrud");
        assert_eq!(fetched.desc.as_deref(), Some("Bring shuttles"));
        assert_eq!(fetched.created_by, "user-1");
        assert!(fetched.created_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_find_missing_event_is_none() {
        let store = MemoryDocumentStore::new();
        let repo = EventRepository::new(&store);
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_merges_and_trims_location() {
        let store = MemoryDocumentStore::new();
        let repo = EventRepository::new(&store);
        let created = repo.create(&request(), "user-1").await.unwrap();

        let patch = UpdateEventRequest {
            area: Some(" Baner ".into()),
            ..Default::default()
        };
        let updated = repo.update(&created.id, &patch).await.unwrap();

        assert_eq!(updated.area, "Baner");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.created_by, "user-1");
    }

    #[tokio::test]
    async fn test_update_can_clear_description() {
        let store = MemoryDocumentStore::new();
        let repo = EventRepository::new(&store);
        let created = repo.create(&request(), "user-1").await.unwrap();

        let rename = UpdateEventRequest {
            name: Some("Morning doubles".into()),
            ..Default::default()
        };
        let renamed = repo.update(&created.id, &rename).await.unwrap();
        assert_eq!(renamed.desc.as_deref(), Some("Bring shuttles"));

        let clear = UpdateEventRequest {
            desc: Some(None),
            ..Default::default()
        };
        let cleared = repo.update(&created.id, &clear).await.unwrap();
        assert!(cleared.desc.is_none());
        assert_eq!(cleared.name, "Morning doubles");
    }

    #[tokio::test]
    async fn test_update_missing_event_is_not_found() {
        let store = MemoryDocumentStore::new();
        let repo = EventRepository::new(&store);

        let err = repo
            .update("missing", &UpdateEventRequest::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let store = MemoryDocumentStore::new();
        let repo = EventRepository::new(&store);
        let created = repo.create(&request(), "user-1").await.unwrap();

        repo.delete(&created.id).await.unwrap();
        repo.delete(&created.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
