use serde_json::json;
use storage::{
    DocumentStore,
    models::Sport,
    repository::{audit_log::AuditLog, sport::SportRepository},
};

use crate::error::WebResult;
use crate::middleware::auth::Session;

pub async fn list_sports(store: &dyn DocumentStore) -> WebResult<Vec<Sport>> {
    Ok(SportRepository::new(store).list().await?)
}

pub async fn create_sport(store: &dyn DocumentStore, session: &Session, name: &str) -> WebResult<Sport> {
    let sport = SportRepository::new(store).create(name).await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "add_sport",
            json!({ "id": sport.id, "name": sport.name }),
        )
        .await;

    Ok(sport)
}

pub async fn rename_sport(
    store: &dyn DocumentStore,
    session: &Session,
    id: &str,
    name: &str,
) -> WebResult<Sport> {
    let sport = SportRepository::new(store).rename(id, name).await?;

    AuditLog::new(store)
        .record(
            Some(&session.user_id),
            "rename_sport",
            json!({ "id": id, "name": sport.name }),
        )
        .await;

    Ok(sport)
}

pub async fn delete_sport(store: &dyn DocumentStore, session: &Session, id: &str) -> WebResult<()> {
    SportRepository::new(store).delete(id).await?;

    AuditLog::new(store)
        .record(Some(&session.user_id), "delete_sport", json!({ "id": id }))
        .await;

    Ok(())
}
