use crate::config::Config;
use crate::db::{booking_repository::BookingRepository, service_repository::ServiceRepository};
use crate::utils::jwt::JwtKeys;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub jwt_keys: Arc<JwtKeys>,
    pub config: Arc<Config>,
}
