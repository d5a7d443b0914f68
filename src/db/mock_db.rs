use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{
    booking_repository::BookingRepository, documents_skipping_malformed,
    service_repository::ServiceRepository, StoreError,
};
use crate::models::{
    booking::{Booking, NewBooking},
    service::{Service, ServiceSummary},
    store_result::{DeleteResult, InsertOneResult, UpdateResult},
};

fn store_failure() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[derive(Default)]
pub struct MockServiceRepository {
    pub services: Vec<Service>,
    pub should_fail: bool,
}

#[async_trait]
impl ServiceRepository for MockServiceRepository {
    async fn list_services(&self) -> Result<Vec<Service>, StoreError> {
        if self.should_fail {
            return Err(store_failure());
        }
        Ok(self.services.clone())
    }

    async fn find_service(&self, id: Uuid) -> Result<Option<ServiceSummary>, StoreError> {
        if self.should_fail {
            return Err(store_failure());
        }
        Ok(self
            .services
            .iter()
            .find(|service| service.id == id)
            .cloned()
            .map(ServiceSummary::from))
    }
}

/// Keeps bookings as raw documents, the way the real store does.
#[derive(Default)]
pub struct MockBookingRepository {
    pub documents: Mutex<Vec<(Uuid, Map<String, Value>)>>,
    pub should_fail: bool,
}

impl MockBookingRepository {
    pub fn with_bookings(bookings: Vec<NewBooking>) -> Self {
        let documents = bookings
            .into_iter()
            .map(|booking| (Uuid::new_v4(), booking.into_document()))
            .collect();
        Self {
            documents: Mutex::new(documents),
            should_fail: false,
        }
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| *id)
            .collect()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn insert_booking(&self, booking: NewBooking) -> Result<InsertOneResult, StoreError> {
        if self.should_fail {
            return Err(store_failure());
        }
        let id = Uuid::new_v4();
        self.documents
            .lock()
            .unwrap()
            .push((id, booking.into_document()));
        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn list_bookings(&self, email: Option<&str>) -> Result<Vec<Booking>, StoreError> {
        if self.should_fail {
            return Err(store_failure());
        }
        let documents = self.documents.lock().unwrap().clone();
        let matching = documents
            .into_iter()
            .filter(|(_, doc)| match email {
                Some(email) => doc.get("email").and_then(Value::as_str) == Some(email),
                None => true,
            })
            .map(|(id, doc)| (id, Value::Object(doc)));
        Ok(documents_skipping_malformed(matching))
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        status: Option<&str>,
    ) -> Result<UpdateResult, StoreError> {
        if self.should_fail {
            return Err(store_failure());
        }
        let status = status.map_or(Value::Null, |s| Value::String(s.to_string()));
        let mut documents = self.documents.lock().unwrap();
        match documents.iter_mut().find(|(doc_id, _)| *doc_id == id) {
            Some((_, doc)) if doc.get("status") == Some(&status) => Ok(UpdateResult::new(1, 0)),
            Some((_, doc)) => {
                doc.insert("status".into(), status);
                Ok(UpdateResult::new(1, 1))
            }
            None => Ok(UpdateResult::new(0, 0)),
        }
    }

    async fn delete_booking(&self, id: Uuid) -> Result<DeleteResult, StoreError> {
        if self.should_fail {
            return Err(store_failure());
        }
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|(doc_id, _)| *doc_id != id);
        Ok(DeleteResult::new((before - documents.len()) as u64))
    }
}
