use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Service;

#[async_trait]
pub trait ServiceRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Service>>;
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Service>>;
    async fn get_all(&self, only_active: bool) -> anyhow::Result<Vec<Service>>;
    async fn insert(&self, service: &Service) -> anyhow::Result<Uuid>;
    async fn update(&self, service: &Service) -> anyhow::Result<()>;
}
