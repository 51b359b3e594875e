use std::sync::Arc;

use async_trait::async_trait;
use domain_identity::model::entity::Role;
use domain_identity::repository::UserRepo;
use domain_ticket::exception::TicketResult;
use domain_ticket::model::entity::TicketStatus;
use domain_ticket::model::vo::{DashboardSummary, TechnicianLoad};
use domain_ticket::repository::{ServiceRepo, TicketRepo};
use domain_ticket::service::DashboardService;
use typed_builder::TypedBuilder;

/// Read-only aggregates for the admin dashboard; the numbers are consumed by
/// external dashboards as-is.
#[derive(TypedBuilder)]
pub struct DashboardServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    user_repo: Arc<dyn UserRepo>,
    service_repo: Arc<dyn ServiceRepo>,
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn summary(&self) -> TicketResult<DashboardSummary> {
        let open = self.ticket_repo.count_by_status(TicketStatus::Open).await?;
        let reopened = self.ticket_repo.count_by_status(TicketStatus::Reopened).await?;
        let in_progress = self.ticket_repo.count_by_status(TicketStatus::InProgress).await?;
        let closed = self.ticket_repo.count_by_status(TicketStatus::Closed).await?;

        let technicians = self.user_repo.get_by_role(Role::Technician).await?;
        let mut technician_load = Vec::new();
        let mut active_technicians = 0;
        for technician in technicians {
            if !technician.active {
                continue;
            }
            active_technicians += 1;
            let in_progress =
                self.ticket_repo.count_in_progress_by_technician(technician.id).await?;
            technician_load.push(TechnicianLoad {
                technician_id: technician.id,
                name: technician.name,
                in_progress,
            });
        }

        let active_services = self.service_repo.get_all(true).await?.len() as u64;

        Ok(DashboardSummary {
            open,
            reopened,
            in_progress,
            closed,
            open_queue_depth: open + reopened,
            active_technicians,
            active_services,
            technician_load,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_identity::mock::MockUserRepo;
    use domain_identity::model::entity::User;
    use domain_ticket::mock::{MockServiceRepo, MockTicketRepo};
    use uuid::Uuid;

    #[tokio::test]
    async fn summary_aggregates_counts_and_skips_inactive_technicians() {
        let mut ticket_repo = MockTicketRepo::new();
        ticket_repo.expect_count_by_status().returning(|status| {
            Ok(match status {
                TicketStatus::Open => 3,
                TicketStatus::Reopened => 1,
                TicketStatus::InProgress => 2,
                TicketStatus::Closed => 10,
            })
        });
        ticket_repo.expect_count_in_progress_by_technician().returning(|_| Ok(2));

        let mut user_repo = MockUserRepo::new();
        user_repo.expect_get_by_role().returning(|_| {
            Ok(vec![
                User {
                    id: Uuid::new_v4(),
                    name: "Ativa".to_string(),
                    role: Role::Technician,
                    active: true,
                    ..Default::default()
                },
                User {
                    id: Uuid::new_v4(),
                    name: "Desligado".to_string(),
                    role: Role::Technician,
                    active: false,
                    ..Default::default()
                },
            ])
        });

        let mut service_repo = MockServiceRepo::new();
        service_repo.expect_get_all().returning(|_| Ok(vec![Default::default()]));

        let summary = DashboardServiceImpl::builder()
            .ticket_repo(Arc::new(ticket_repo))
            .user_repo(Arc::new(user_repo))
            .service_repo(Arc::new(service_repo))
            .build()
            .summary()
            .await
            .unwrap();

        assert_eq!(summary.open_queue_depth, 4);
        assert_eq!(summary.active_technicians, 1);
        assert_eq!(summary.technician_load.len(), 1);
        assert_eq!(summary.active_services, 1);
    }
}
