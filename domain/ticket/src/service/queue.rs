use async_trait::async_trait;
use domain_identity::model::vo::CurrentUser;

use crate::exception::TicketResult;
use crate::model::entity::Ticket;

/// Role-conditional ticket listings. State-free per request: the caller's
/// role decides which subset is visible, and nothing else.
#[async_trait]
pub trait TicketQueueService: Send + Sync {
    /// USER: tickets the caller opened.
    async fn own_tickets(&self, caller: &CurrentUser) -> TicketResult<Vec<Ticket>>;

    /// TECHNICIAN: tickets assigned to the caller.
    async fn assigned_tickets(&self, caller: &CurrentUser) -> TicketResult<Vec<Ticket>>;

    /// ADMIN: every ticket matching the required `status` query parameter.
    async fn all_by_status(
        &self,
        caller: &CurrentUser,
        status: Option<&str>,
    ) -> TicketResult<Vec<Ticket>>;

    /// ADMIN/TECHNICIAN: the pull queue, OPEN and REOPENED tickets.
    async fn open_queue(&self, caller: &CurrentUser) -> TicketResult<Vec<Ticket>>;
}
