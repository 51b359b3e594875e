use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::ServiceOrder;

#[async_trait]
pub trait ServiceOrderRepo: Send + Sync {
    async fn insert_many(&self, orders: &[ServiceOrder]) -> anyhow::Result<()>;
    async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<ServiceOrder>>;
}
