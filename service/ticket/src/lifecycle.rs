use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_identity::model::entity::Role;
use domain_identity::model::vo::CurrentUser;
use domain_identity::repository::UserRepo;
use domain_ticket::command::OpenTicket;
use domain_ticket::exception::{TicketException, TicketResult};
use domain_ticket::model::entity::{
    ServiceOrder, Ticket, TicketHistoryEntry, TicketStatus,
};
use domain_ticket::repository::{ServiceOrderRepo, ServiceRepo, TicketHistoryRepo, TicketRepo};
use domain_ticket::service::TicketLifecycleService;
use rand::Rng;
use tracing::info;
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// Uniqueness is backed by the column constraint; a collision on the random
/// suffix surfaces as a database error.
fn order_number(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..=999_999);
    format!("OS-{}-{suffix:06}", now.format("%Y%m%d"))
}

#[derive(TypedBuilder)]
pub struct TicketLifecycleServiceImpl {
    ticket_repo: Arc<dyn TicketRepo>,
    service_repo: Arc<dyn ServiceRepo>,
    service_order_repo: Arc<dyn ServiceOrderRepo>,
    history_repo: Arc<dyn TicketHistoryRepo>,
    user_repo: Arc<dyn UserRepo>,
}

impl TicketLifecycleServiceImpl {
    async fn load(&self, id: Uuid) -> TicketResult<Ticket> {
        self.ticket_repo
            .find_by_id(id)
            .await?
            .ok_or(TicketException::TicketNotFound { id })
    }

    fn check_transition(ticket: &Ticket, to: TicketStatus) -> TicketResult<TicketStatus> {
        let from = ticket.status;
        if !from.can_transition_to(to) {
            return Err(TicketException::InvalidTransition { from, to });
        }
        Ok(from)
    }

    /// One immutable history entry per transition, no more, no less.
    async fn record(
        &self,
        ticket: &Ticket,
        from: Option<TicketStatus>,
        description: String,
        actor: &CurrentUser,
    ) -> TicketResult<()> {
        let author_name = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .map(|user| user.name)
            .unwrap_or_else(|| actor.email.clone());
        let entry = TicketHistoryEntry {
            id: Uuid::new_v4(),
            ticket_id: ticket.id,
            from_status: from,
            to_status: ticket.status,
            description,
            author_id: actor.id,
            author_name,
            created_time: Utc::now(),
        };
        self.history_repo.append(&entry).await?;
        Ok(())
    }
}

#[async_trait]
impl TicketLifecycleService for TicketLifecycleServiceImpl {
    async fn open(&self, caller: &CurrentUser, cmd: OpenTicket) -> TicketResult<Ticket> {
        if cmd.description.trim().is_empty() {
            return Err(TicketException::Validation {
                field: "descricao".to_string(),
            });
        }
        if cmd.service_ids.is_empty() {
            return Err(TicketException::Validation {
                field: "servicos".to_string(),
            });
        }
        for id in &cmd.service_ids {
            match self.service_repo.find_by_id(*id).await? {
                Some(service) if service.active => {}
                _ => return Err(TicketException::ServiceNotFound { id: *id }),
            }
        }

        let now = Utc::now();
        let ticket = Ticket {
            id: Uuid::new_v4(),
            order_number: order_number(now),
            description: cmd.description,
            status: TicketStatus::Open,
            requester_id: caller.id,
            technician_id: None,
            closure_description: None,
            created_time: now,
            last_modified_time: now,
            closed_time: None,
        };
        self.ticket_repo.insert(&ticket).await?;

        let orders = cmd
            .service_ids
            .iter()
            .map(|service_id| ServiceOrder {
                id: Uuid::new_v4(),
                ticket_id: ticket.id,
                service_id: *service_id,
            })
            .collect::<Vec<_>>();
        self.service_order_repo.insert_many(&orders).await?;

        self.record(&ticket, None, "Chamado aberto.".to_string(), caller).await?;
        info!(ticket = %ticket.order_number, requester = %caller.id, "ticket opened");
        Ok(ticket)
    }

    async fn assign(
        &self,
        ticket_id: Uuid,
        technician_id: Uuid,
        actor: &CurrentUser,
    ) -> TicketResult<Ticket> {
        // Technicians take tickets for themselves; only admins hand one over.
        if actor.role == Role::Technician && technician_id != actor.id {
            return Err(TicketException::Forbidden);
        }

        let mut ticket = self.load(ticket_id).await?;
        let from = Self::check_transition(&ticket, TicketStatus::InProgress)?;

        let technician = self
            .user_repo
            .find_by_id(technician_id)
            .await?
            .filter(|user| user.role == Role::Technician && user.active)
            .ok_or(TicketException::TechnicianUnavailable { id: technician_id })?;

        ticket.status = TicketStatus::InProgress;
        ticket.technician_id = Some(technician_id);
        ticket.last_modified_time = Utc::now();
        self.ticket_repo.update(&ticket).await?;

        self.record(
            &ticket,
            Some(from),
            format!("Chamado assumido pelo técnico {}.", technician.name),
            actor,
        )
        .await?;
        Ok(ticket)
    }

    async fn close(
        &self,
        ticket_id: Uuid,
        closure_description: String,
        actor: &CurrentUser,
    ) -> TicketResult<Ticket> {
        if closure_description.trim().is_empty() {
            return Err(TicketException::Validation {
                field: "descricaoFechamento".to_string(),
            });
        }

        let mut ticket = self.load(ticket_id).await?;
        let from = Self::check_transition(&ticket, TicketStatus::Closed)?;
        if actor.role != Role::Admin && ticket.technician_id != Some(actor.id) {
            return Err(TicketException::Forbidden);
        }

        ticket.status = TicketStatus::Closed;
        ticket.closure_description = Some(closure_description.clone());
        let now = Utc::now();
        ticket.closed_time = Some(now);
        ticket.last_modified_time = now;
        self.ticket_repo.update(&ticket).await?;

        self.record(&ticket, Some(from), closure_description, actor).await?;
        Ok(ticket)
    }

    async fn reopen(&self, ticket_id: Uuid, actor: &CurrentUser) -> TicketResult<Ticket> {
        let mut ticket = self.load(ticket_id).await?;
        let from = Self::check_transition(&ticket, TicketStatus::Reopened)?;
        if actor.role != Role::Admin && ticket.requester_id != actor.id {
            return Err(TicketException::Forbidden);
        }

        ticket.status = TicketStatus::Reopened;
        ticket.technician_id = None;
        ticket.closure_description = None;
        ticket.closed_time = None;
        ticket.last_modified_time = Utc::now();
        self.ticket_repo.update(&ticket).await?;

        self.record(&ticket, Some(from), "Chamado reaberto.".to_string(), actor).await?;
        Ok(ticket)
    }

    async fn get(&self, ticket_id: Uuid) -> TicketResult<Ticket> {
        self.load(ticket_id).await
    }

    async fn history(&self, ticket_id: Uuid) -> TicketResult<Vec<TicketHistoryEntry>> {
        self.load(ticket_id).await?;
        Ok(self.history_repo.list_by_ticket(ticket_id).await?)
    }
}
