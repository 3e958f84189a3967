use serde_json::json;
use storage::{
    DocumentStore,
    models::Area,
    repository::{area::AreaRepository, audit_log::AuditLog},
};

use crate::error::WebResult;
use crate::middleware::auth::Session;

/// Areas registered for a city id
pub async fn list_areas(store: &dyn DocumentStore, city_id: &str) -> WebResult<Vec<Area>> {
    Ok(AreaRepository::new(store).list_for_city(city_id).await?)
}

pub async fn create_area(
    store: &dyn DocumentStore,
    session: &Session,
    city_id: &str,
    name: &str,
) -> WebResult<Area> {
    let area = AreaRepository::new(store).create(city_id, name).await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "add_area",
            json!({ "id": area.id, "cityId": area.city_id, "name": area.name }),
        )
        .await;

    Ok(area)
}

pub async fn delete_area(store: &dyn DocumentStore, session: &Session, id: &str) -> WebResult<()> {
    AreaRepository::new(store).delete(id).await?;

    AuditLog::new(store)
        .record(Some(&session.user_id), "delete_area", json!({ "id": id }))
        .await;

    Ok(())
}
