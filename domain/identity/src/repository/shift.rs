use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::Shift;

#[async_trait]
pub trait ShiftRepo: Send + Sync {
    async fn find_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Option<Shift>>;
    async fn get_all(&self) -> anyhow::Result<Vec<Shift>>;
    /// Insert or replace the technician's single shift row.
    async fn upsert(&self, shift: &Shift) -> anyhow::Result<()>;
}
