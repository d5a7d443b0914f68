use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{
    document_with_id, documents_skipping_malformed, service_repository::ServiceRepository,
    StoreError,
};
use crate::models::service::{Service, ServiceSummary};

pub struct PostgresServiceRepository {
    pub pool: PgPool,
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepository {
    async fn list_services(&self) -> Result<Vec<Service>, StoreError> {
        let rows = sqlx::query("SELECT id, doc FROM services")
            .fetch_all(&self.pool)
            .await?;

        let documents = rows
            .into_iter()
            .map(|row| Ok((row.try_get::<Uuid, _>("id")?, row.try_get::<Value, _>("doc")?)))
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(documents_skipping_malformed(documents))
    }

    async fn find_service(&self, id: Uuid) -> Result<Option<ServiceSummary>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT jsonb_strip_nulls(jsonb_build_object(
                'title', doc -> 'title',
                'price', doc -> 'price',
                'service_id', doc -> 'service_id',
                'img', doc -> 'img'
            )) AS doc
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let doc: Value = row.try_get("doc")?;
                document_with_id(id, doc).map(Some)
            }
            None => Ok(None),
        }
    }
}
