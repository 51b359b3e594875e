use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use domain_identity::model::entity::Role;
use domain_identity::model::vo::CurrentUser;
use domain_ticket::exception::{TicketException, TicketResult};
use domain_ticket::model::entity::{Ticket, TicketStatus};
use domain_ticket::repository::TicketRepo;
use domain_ticket::service::TicketQueueService;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct TicketQueueServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
}

fn require_role(caller: &CurrentUser, allowed: &[Role]) -> TicketResult<()> {
    if !allowed.contains(&caller.role) {
        return Err(TicketException::Forbidden);
    }
    Ok(())
}

#[async_trait]
impl TicketQueueService for TicketQueueServiceImpl {
    async fn own_tickets(&self, caller: &CurrentUser) -> TicketResult<Vec<Ticket>> {
        require_role(caller, &[Role::User])?;
        Ok(self.ticket_repo.list_by_requester(caller.id).await?)
    }

    async fn assigned_tickets(&self, caller: &CurrentUser) -> TicketResult<Vec<Ticket>> {
        require_role(caller, &[Role::Technician])?;
        Ok(self.ticket_repo.list_by_technician(caller.id).await?)
    }

    async fn all_by_status(
        &self,
        caller: &CurrentUser,
        status: Option<&str>,
    ) -> TicketResult<Vec<Ticket>> {
        require_role(caller, &[Role::Admin])?;
        let raw = status.ok_or(TicketException::MissingStatus)?;
        let status = TicketStatus::from_str(raw).map_err(|_| TicketException::InvalidStatus {
            value: raw.to_string(),
        })?;
        Ok(self.ticket_repo.list_by_statuses(&[status]).await?)
    }

    async fn open_queue(&self, caller: &CurrentUser) -> TicketResult<Vec<Ticket>> {
        require_role(caller, &[Role::Admin, Role::Technician])?;
        Ok(self
            .ticket_repo
            .list_by_statuses(&[TicketStatus::Open, TicketStatus::Reopened])
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use domain_ticket::mock::MockTicketRepo;
    use uuid::Uuid;

    fn caller(role: Role) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "someone@helpme.dev".to_string(),
            role,
        }
    }

    fn service(ticket_repo: MockTicketRepo) -> TicketQueueServiceImpl {
        TicketQueueServiceImpl::builder().ticket_repo(Arc::new(ticket_repo)).build()
    }

    fn ticket_with(status: TicketStatus) -> Ticket {
        Ticket {
            id: Uuid::new_v4(),
            status,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn own_tickets_is_users_only() {
        for role in [Role::Technician, Role::Admin] {
            let err = service(MockTicketRepo::new()).own_tickets(&caller(role)).await;
            assert!(matches!(err, Err(TicketException::Forbidden)));
        }
    }

    #[tokio::test]
    async fn own_tickets_filters_by_the_caller() {
        let caller = caller(Role::User);
        let caller_id = caller.id;
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo
            .expect_list_by_requester()
            .times(1)
            .withf(move |id| *id == caller_id)
            .returning(|_| Ok(vec![]));
        service(ticket_repo).own_tickets(&caller).await.unwrap();
    }

    #[tokio::test]
    async fn assigned_tickets_is_technicians_only() {
        for role in [Role::User, Role::Admin] {
            let err = service(MockTicketRepo::new()).assigned_tickets(&caller(role)).await;
            assert!(matches!(err, Err(TicketException::Forbidden)));
        }
    }

    #[tokio::test]
    async fn all_by_status_is_admins_only() {
        for role in [Role::User, Role::Technician] {
            let err = service(MockTicketRepo::new())
                .all_by_status(&caller(role), Some("OPEN"))
                .await;
            assert!(matches!(err, Err(TicketException::Forbidden)));
        }
    }

    #[tokio::test]
    async fn missing_status_parameter_names_the_field() {
        let err = service(MockTicketRepo::new())
            .all_by_status(&caller(Role::Admin), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("status"));
        assert!(matches!(err, TicketException::MissingStatus));
    }

    #[tokio::test]
    async fn unknown_status_value_is_invalido() {
        let err = service(MockTicketRepo::new())
            .all_by_status(&caller(Role::Admin), Some("EM_ABERTO"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("inválido"));
        assert!(matches!(err, TicketException::InvalidStatus { .. }));
    }

    #[tokio::test]
    async fn valid_status_returns_only_matching_tickets() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo
            .expect_list_by_statuses()
            .times(1)
            .withf(|statuses| statuses == [TicketStatus::Closed])
            .returning(|_| Ok(vec![ticket_with(TicketStatus::Closed)]));
        let tickets = service(ticket_repo)
            .all_by_status(&caller(Role::Admin), Some("CLOSED"))
            .await
            .unwrap();
        assert!(tickets.iter().all(|t| t.status == TicketStatus::Closed));
    }

    #[tokio::test]
    async fn open_queue_spans_open_and_reopened() {
        for role in [Role::Admin, Role::Technician] {
            let mut ticket_repo = MockTicketRepo::new();
            ticket_repo
                .expect_list_by_statuses()
                .times(1)
                .withf(|statuses| statuses == [TicketStatus::Open, TicketStatus::Reopened])
                .returning(|_| Ok(vec![]));
            service(ticket_repo).open_queue(&caller(role)).await.unwrap();
        }
        let err = service(MockTicketRepo::new()).open_queue(&caller(Role::User)).await;
        assert!(matches!(err, Err(TicketException::Forbidden)));
    }

    #[tokio::test]
    async fn storage_failure_surfaces_as_internal_error_with_a_message() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo
            .expect_list_by_statuses()
            .returning(|_| Err(anyhow!("connection refused")));
        let err = service(ticket_repo)
            .all_by_status(&caller(Role::Admin), Some("OPEN"))
            .await
            .unwrap_err();
        assert!(matches!(err, TicketException::InternalError { .. }));
        assert!(!err.to_string().is_empty());
    }
}
