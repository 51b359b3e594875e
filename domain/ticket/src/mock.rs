use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::model::entity::{Service, ServiceOrder, Ticket, TicketHistoryEntry, TicketStatus};
use crate::repository::{ServiceOrderRepo, ServiceRepo, TicketHistoryRepo, TicketRepo};

mock! {
    pub TicketRepo {}
    #[async_trait]
    impl TicketRepo for TicketRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>>;
        async fn insert(&self, ticket: &Ticket) -> anyhow::Result<Uuid>;
        async fn update(&self, ticket: &Ticket) -> anyhow::Result<()>;
        async fn list_by_requester(&self, requester_id: Uuid) -> anyhow::Result<Vec<Ticket>>;
        async fn list_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Ticket>>;
        async fn list_by_statuses(&self, statuses: &[TicketStatus]) -> anyhow::Result<Vec<Ticket>>;
        async fn count_by_status(&self, status: TicketStatus) -> anyhow::Result<u64>;
        async fn count_in_progress_by_technician(&self, technician_id: Uuid) -> anyhow::Result<u64>;
    }
}

mock! {
    pub ServiceRepo {}
    #[async_trait]
    impl ServiceRepo for ServiceRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Service>>;
        async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Service>>;
        async fn get_all(&self, only_active: bool) -> anyhow::Result<Vec<Service>>;
        async fn insert(&self, service: &Service) -> anyhow::Result<Uuid>;
        async fn update(&self, service: &Service) -> anyhow::Result<()>;
    }
}

mock! {
    pub ServiceOrderRepo {}
    #[async_trait]
    impl ServiceOrderRepo for ServiceOrderRepo {
        async fn insert_many(&self, orders: &[ServiceOrder]) -> anyhow::Result<()>;
        async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<ServiceOrder>>;
    }
}

mock! {
    pub TicketHistoryRepo {}
    #[async_trait]
    impl TicketHistoryRepo for TicketHistoryRepo {
        async fn append(&self, entry: &TicketHistoryEntry) -> anyhow::Result<()>;
        async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<TicketHistoryEntry>>;
    }
}
