pub mod booking_repository;
#[cfg(test)]
pub mod mock_db;
pub mod postgres_booking_repository;
pub mod postgres_service_repository;
pub mod service_repository;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored document {id} is malformed: {source}")]
    MalformedDocument {
        id: Uuid,
        #[source]
        source: serde_json::Error,
    },
}

/// Rebuilds a record from its key and JSONB body, exposing the key as `_id`.
pub(crate) fn document_with_id<T: DeserializeOwned>(id: Uuid, doc: Value) -> Result<T, StoreError> {
    let mut map = match doc {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert("_id".into(), Value::String(id.to_string()));

    serde_json::from_value(Value::Object(map))
        .map_err(|source| StoreError::MalformedDocument { id, source })
}

/// Rebuilds every record of a listing. A document that no longer fits the record shape is
/// logged and left out rather than failing the whole listing.
pub(crate) fn documents_skipping_malformed<T, I>(rows: I) -> Vec<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (Uuid, Value)>,
{
    rows.into_iter()
        .filter_map(|(id, doc)| match document_with_id(id, doc) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed document");
                None
            }
        })
        .collect()
}
