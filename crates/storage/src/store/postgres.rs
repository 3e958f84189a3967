use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{Document, DocumentStore, Fields};
use crate::error::{Result, StorageError};

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    data: Json<Fields>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document::new(row.id, row.data.0)
    }
}

/// Document store backed by a single JSONB table in Postgres.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn add(&self, collection: &str, data: Fields) -> Result<String> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(Json(&data))
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, data: Fields, merge: bool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE
            SET data = CASE WHEN $4 THEN documents.data || EXCLUDED.data ELSE EXCLUDED.data END
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(&data))
        .bind(merge)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_all(&self, collection: &str) -> Result<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Document::from))
    }

    async fn update(&self, collection: &str, id: &str, patch: Fields) -> Result<()> {
        let result = sqlx::query(
            "UPDATE documents SET data = data || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(&patch))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(collection, id, "delete targeted a missing document");
        }

        Ok(())
    }

    async fn query(&self, collection: &str, field: &str, value: &Value) -> Result<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1 AND data -> $2 = $3",
        )
        .bind(collection)
        .bind(field)
        .bind(Json(value))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn connect() -> PgDocumentStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let db = crate::Database::new(&url).await.unwrap();
        db.run_migrations().await.unwrap();
        PgDocumentStore::new(db.pool().clone())
    }

    #[tokio::test]
    #[ignore] // Needs a running Postgres
    async fn test_add_then_query_by_field() {
        let store = connect().await;
        let collection = format!("test-{}", Uuid::new_v4());

        let mut data = Fields::new();
        data.insert("cityId".into(), json!("c-1"));
        data.insert("name".into(), json!("Kothrud"));
        let id = store.add(&collection, data).await.unwrap();

        let found = store.query(&collection, "cityId", &json!("c-1")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);

        store.delete(&collection, &id).await.unwrap();
        store.delete(&collection, &id).await.unwrap();
        assert!(store.get_by_id(&collection, &id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Needs a running Postgres
    async fn test_update_missing_document_is_not_found() {
        let store = connect().await;
        let err = store
            .update("events", &Uuid::new_v4().to_string(), Fields::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
