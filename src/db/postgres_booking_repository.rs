use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{booking_repository::BookingRepository, documents_skipping_malformed, StoreError};
use crate::models::{
    booking::{Booking, NewBooking},
    store_result::{DeleteResult, InsertOneResult, UpdateResult},
};

pub struct PostgresBookingRepository {
    pub pool: PgPool,
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert_booking(&self, booking: NewBooking) -> Result<InsertOneResult, StoreError> {
        let id = Uuid::new_v4();
        let doc = Value::Object(booking.into_document());

        sqlx::query("INSERT INTO bookings (id, doc) VALUES ($1, $2)")
            .bind(id)
            .bind(doc)
            .execute(&self.pool)
            .await?;

        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn list_bookings(&self, email: Option<&str>) -> Result<Vec<Booking>, StoreError> {
        let rows = match email {
            Some(email) => {
                sqlx::query("SELECT id, doc FROM bookings WHERE doc ->> 'email' = $1")
                    .bind(email)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("SELECT id, doc FROM bookings")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        let documents = rows
            .into_iter()
            .map(|row| Ok((row.try_get::<Uuid, _>("id")?, row.try_get::<Value, _>("doc")?)))
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(documents_skipping_malformed(documents))
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: Option<&str>,
    ) -> Result<UpdateResult, StoreError> {
        let status = status.map_or(Value::Null, |s| Value::String(s.to_string()));

        // Unchanged documents count as matched but not modified.
        let row = sqlx::query(
            r#"
            WITH target AS (
                SELECT id, doc FROM bookings WHERE id = $1
            ),
            updated AS (
                UPDATE bookings b
                SET doc = jsonb_set(b.doc, '{status}', $2::jsonb)
                FROM target t
                WHERE b.id = t.id
                  AND t.doc -> 'status' IS DISTINCT FROM $2::jsonb
                RETURNING b.id
            )
            SELECT (SELECT COUNT(*) FROM target) AS matched,
                   (SELECT COUNT(*) FROM updated) AS modified
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        let matched: i64 = row.try_get("matched")?;
        let modified: i64 = row.try_get("modified")?;

        Ok(UpdateResult::new(matched as u64, modified as u64))
    }

    async fn delete_booking(&self, id: Uuid) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteResult::new(result.rows_affected()))
    }
}
