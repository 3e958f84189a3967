use serde_json::json;
use storage::{
    DocumentStore,
    models::City,
    repository::{audit_log::AuditLog, city::CityRepository},
};

use crate::error::WebResult;
use crate::middleware::auth::Session;

pub async fn list_cities(store: &dyn DocumentStore) -> WebResult<Vec<City>> {
    Ok(CityRepository::new(store).list().await?)
}

pub async fn create_city(store: &dyn DocumentStore, session: &Session, name: &str) -> WebResult<City> {
    let city = CityRepository::new(store).create(name).await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "add_city",
            json!({ "id": city.id, "name": city.name }),
        )
        .await;

    Ok(city)
}

pub async fn rename_city(
    store: &dyn DocumentStore,
    session: &Session,
    id: &str,
    name: &str,
) -> WebResult<City> {
    let city = CityRepository::new(store).rename(id, name).await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "rename_city",
            json!({ "id": id, "name": city.name }),
        )
        .await;

    Ok(city)
}

/// Remove a city. Areas and events referring to it are kept as they are.
pub async fn delete_city(store: &dyn DocumentStore, session: &Session, id: &str) -> WebResult<()> {
    CityRepository::new(store).delete(id).await?;

    AuditLog::new(store)
        .record(Some(&session.user_id), "delete_city", json!({ "id": id }))
        .await;

    Ok(())
}
