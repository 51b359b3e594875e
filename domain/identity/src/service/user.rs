use async_trait::async_trait;
use uuid::Uuid;

use crate::command::{NewUser, UserUpdate};
use crate::exception::IdentityResult;
use crate::model::entity::User;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create(&self, cmd: NewUser) -> IdentityResult<User>;
    async fn get(&self, id: Uuid) -> IdentityResult<User>;
    async fn list(&self) -> IdentityResult<Vec<User>>;
    async fn update(&self, id: Uuid, cmd: UserUpdate) -> IdentityResult<User>;
    /// Flips the active flag; accounts are never hard-deleted.
    async fn deactivate(&self, id: Uuid) -> IdentityResult<()>;
}
