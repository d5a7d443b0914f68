pub mod booking;
pub mod identity;
pub mod service;
pub mod store_result;
