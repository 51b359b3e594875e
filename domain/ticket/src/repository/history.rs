use async_trait::async_trait;
use uuid::Uuid;

use crate::model::entity::TicketHistoryEntry;

/// Document-store log of ticket transitions. Append-only.
#[async_trait]
pub trait TicketHistoryRepo: Send + Sync {
    async fn append(&self, entry: &TicketHistoryEntry) -> anyhow::Result<()>;
    /// Entries ordered by creation time ascending.
    async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<TicketHistoryEntry>>;
}
