use serde_json::json;
use storage::{
    DocumentStore,
    dto::event::{CreateEventRequest, EventLocations, SimilarLocations, UpdateEventRequest},
    models::Event,
    repository::{audit_log::AuditLog, event::EventRepository},
    services::event_matching::{self, ShuffleMode},
};

use crate::error::{WebError, WebResult};
use crate::middleware::auth::Session;

/// List all events
pub async fn list_events(store: &dyn DocumentStore) -> WebResult<Vec<Event>> {
    Ok(EventRepository::new(store).list().await?)
}

/// Get event by id
pub async fn get_event(store: &dyn DocumentStore, id: &str) -> WebResult<Event> {
    EventRepository::new(store)
        .find_by_id(id)
        .await?
        .ok_or(WebError::NotFound)
}

/// Events at a city/area, compared case-insensitively
pub async fn events_nearby(store: &dyn DocumentStore, city: &str, area: &str) -> WebResult<Vec<Event>> {
    Ok(event_matching::events_nearby(store, city, area).await?)
}

pub async fn event_locations(store: &dyn DocumentStore) -> WebResult<EventLocations> {
    Ok(event_matching::event_locations(store).await?)
}

pub async fn similar_locations(store: &dyn DocumentStore, city: &str, area: &str) -> SimilarLocations {
    event_matching::find_similar_locations(store, city, area).await
}

pub async fn suggestions(store: &dyn DocumentStore, count: usize, mode: ShuffleMode) -> Vec<Event> {
    event_matching::random_suggestions(store, count, mode).await
}

/// Create an event owned by the session user
pub async fn create_event(
    store: &dyn DocumentStore,
    session: &Session,
    request: &CreateEventRequest,
) -> WebResult<Event> {
    let event = EventRepository::new(store)
        .create(request, &session.user_id)
        .await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "add_event",
            json!({ "id": event.id, "name": event.name }),
        )
        .await;

    Ok(event)
}

/// Update an event. Only its creator or an administrator may do so.
pub async fn update_event(
    store: &dyn DocumentStore,
    session: &Session,
    id: &str,
    request: &UpdateEventRequest,
) -> WebResult<Event> {
    let repo = EventRepository::new(store);

    let existing = repo.find_by_id(id).await?.ok_or(WebError::NotFound)?;
    if !session.can_modify(&existing.created_by) {
        return Err(WebError::Forbidden);
    }

    let updated = repo.update(id, request).await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "update_event",
            json!({ "id": id, "patch": request }),
        )
        .await;

    Ok(updated)
}

/// Delete an event. Deleting an id that no longer exists succeeds and is
/// still recorded.
pub async fn delete_event(store: &dyn DocumentStore, session: &Session, id: &str) -> WebResult<()> {
    let repo = EventRepository::new(store);

    match repo.find_by_id(id).await? {
        Some(existing) if !session.can_modify(&existing.created_by) => {
            return Err(WebError::Forbidden);
        }
        Some(_) => {}
        None => tracing::debug!(id, "deleting an event that does not exist"),
    }

    repo.delete(id).await?;

    AuditLog::new(store)
        .record(Some(&session.user_id), "delete_event", json!({ "id": id }))
        .await;

    Ok(())
}
