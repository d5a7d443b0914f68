use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use crate::models::{
    booking::{Booking, NewBooking},
    store_result::{DeleteResult, InsertOneResult, UpdateResult},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_booking(&self, booking: NewBooking) -> Result<InsertOneResult, StoreError>;

    /// All bookings, or only those whose `email` equals the filter.
    async fn list_bookings(&self, email: Option<&str>) -> Result<Vec<Booking>, StoreError>;

    /// Sets `status` (or clears it to `null`) and leaves every other field alone.
    async fn update_booking_status(
        &self,
        id: Uuid,
        status: Option<&str>,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_booking(&self, id: Uuid) -> Result<DeleteResult, StoreError>;
}
