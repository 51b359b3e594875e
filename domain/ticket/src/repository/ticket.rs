use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::{Ticket, TicketStatus};

#[async_trait]
pub trait TicketRepo: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>>;
    async fn insert(&self, ticket: &Ticket) -> anyhow::Result<Uuid>;
    async fn update(&self, ticket: &Ticket) -> anyhow::Result<()>;
    async fn list_by_requester(&self, requester_id: Uuid) -> anyhow::Result<Vec<Ticket>>;
    async fn list_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Ticket>>;
    async fn list_by_statuses(&self, statuses: &[TicketStatus]) -> anyhow::Result<Vec<Ticket>>;
    async fn count_by_status(&self, status: TicketStatus) -> anyhow::Result<u64>;
    async fn count_in_progress_by_technician(&self, technician_id: Uuid) -> anyhow::Result<u64>;
}
