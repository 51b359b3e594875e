use async_trait::async_trait;
use uuid::Uuid;

use crate::command::{NewTechnician, ShiftWindow};
use crate::exception::IdentityResult;
use crate::model::entity::{Shift, User};
use crate::model::vo::TechnicianInfo;

#[async_trait]
pub trait TechnicianService: Send + Sync {
    async fn register(&self, cmd: NewTechnician) -> IdentityResult<User>;
    async fn list(&self) -> IdentityResult<Vec<TechnicianInfo>>;
    async fn set_shift(&self, technician_id: Uuid, window: ShiftWindow) -> IdentityResult<Shift>;
}
