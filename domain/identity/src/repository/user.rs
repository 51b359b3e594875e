use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::{Role, User};

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn get_all(&self) -> anyhow::Result<Vec<User>>;
    async fn get_by_role(&self, role: Role) -> anyhow::Result<Vec<User>>;
    async fn insert(&self, user: &User) -> anyhow::Result<Uuid>;
    async fn update(&self, user: &User) -> anyhow::Result<()>;
}
