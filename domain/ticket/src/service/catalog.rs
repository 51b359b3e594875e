use async_trait::async_trait;
use uuid::Uuid;

use crate::command::{NewService, ServiceUpdate};
use crate::exception::TicketResult;
use crate::model::entity::Service;

/// Catalog CRUD. Validation and persistence only.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create(&self, cmd: NewService) -> TicketResult<Service>;
    async fn get(&self, id: Uuid) -> TicketResult<Service>;
    async fn list(&self, only_active: bool) -> TicketResult<Vec<Service>>;
    async fn update(&self, id: Uuid, cmd: ServiceUpdate) -> TicketResult<Service>;
    async fn deactivate(&self, id: Uuid) -> TicketResult<()>;
}
