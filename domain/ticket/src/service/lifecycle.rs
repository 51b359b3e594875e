use async_trait::async_trait;
use domain_identity::model::vo::CurrentUser;
use uuid::Uuid;

use crate::command::OpenTicket;
use crate::exception::TicketResult;
use crate::model::entity::{Ticket, TicketHistoryEntry};

/// Drives the ticket state machine
/// `OPEN ⇄ REOPENED → IN_PROGRESS → CLOSED`. Every transition appends
/// exactly one immutable history entry.
#[async_trait]
pub trait TicketLifecycleService: Send + Sync {
    /// Creates a ticket in OPEN owned by the caller, allocating one service
    /// order per selected catalog service.
    async fn open(&self, caller: &CurrentUser, cmd: OpenTicket) -> TicketResult<Ticket>;

    /// OPEN/REOPENED → IN_PROGRESS, setting the technician.
    async fn assign(
        &self,
        ticket_id: Uuid,
        technician_id: Uuid,
        actor: &CurrentUser,
    ) -> TicketResult<Ticket>;

    /// IN_PROGRESS → CLOSED, stamping the closure time and description.
    async fn close(
        &self,
        ticket_id: Uuid,
        closure_description: String,
        actor: &CurrentUser,
    ) -> TicketResult<Ticket>;

    /// CLOSED → REOPENED; allowed only for the requester or an admin.
    async fn reopen(&self, ticket_id: Uuid, actor: &CurrentUser) -> TicketResult<Ticket>;

    async fn get(&self, ticket_id: Uuid) -> TicketResult<Ticket>;

    /// History entries ascending by time.
    async fn history(&self, ticket_id: Uuid) -> TicketResult<Vec<TicketHistoryEntry>>;
}
