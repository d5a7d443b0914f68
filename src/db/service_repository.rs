use async_trait::async_trait;
use uuid::Uuid;

use super::StoreError;
use crate::models::service::{Service, ServiceSummary};

/// Read-only access to the service catalog.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, StoreError>;

    async fn find_service(&self, id: Uuid) -> Result<Option<ServiceSummary>, StoreError>;
}
