use database_model::prelude::*;
use domain_ticket::model::entity::{Ticket, TicketStatus};
use domain_ticket::repository::TicketRepo;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, PaginatorTrait, QueryOrder};

use crate::infrastructure::database::OrmRepo;

fn active_model(ticket: &Ticket) -> ChamadoActiveModel {
    ChamadoActiveModel {
        id: Set(ticket.id),
        order_number: Set(ticket.order_number.clone()),
        description: Set(ticket.description.clone()),
        status: Set(ticket.status as i32),
        requester_id: Set(ticket.requester_id),
        technician_id: Set(ticket.technician_id),
        closure_description: Set(ticket.closure_description.clone()),
        created_time: Set(ticket.created_time),
        last_modified_time: Set(ticket.last_modified_time),
        closed_time: Set(ticket.closed_time),
    }
}

#[async_trait::async_trait]
impl TicketRepo for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Ticket>> {
        ChamadoEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Ticket::try_from)
            .transpose()
    }

    async fn insert(&self, ticket: &Ticket) -> anyhow::Result<Uuid> {
        ChamadoEntity::insert(active_model(ticket)).exec(self.db.get_connection()).await?;
        Ok(ticket.id)
    }

    async fn update(&self, ticket: &Ticket) -> anyhow::Result<()> {
        ChamadoEntity::update(active_model(ticket)).exec(self.db.get_connection()).await?;
        Ok(())
    }

    async fn list_by_requester(&self, requester_id: Uuid) -> anyhow::Result<Vec<Ticket>> {
        let res = ChamadoEntity::find()
            .filter(ChamadoColumn::RequesterId.eq(requester_id))
            .order_by_desc(ChamadoColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn list_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Vec<Ticket>> {
        let res = ChamadoEntity::find()
            .filter(ChamadoColumn::TechnicianId.eq(technician_id))
            .order_by_desc(ChamadoColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn list_by_statuses(&self, statuses: &[TicketStatus]) -> anyhow::Result<Vec<Ticket>> {
        let res = ChamadoEntity::find()
            .filter(
                ChamadoColumn::Status.is_in(statuses.iter().map(|s| *s as i32).collect::<Vec<_>>()),
            )
            // oldest first: the queue is worked in arrival order
            .order_by_asc(ChamadoColumn::CreatedTime)
            .all(self.db.get_connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn count_by_status(&self, status: TicketStatus) -> anyhow::Result<u64> {
        Ok(ChamadoEntity::find()
            .filter(ChamadoColumn::Status.eq(status as i32))
            .count(self.db.get_connection())
            .await?)
    }

    async fn count_in_progress_by_technician(&self, technician_id: Uuid) -> anyhow::Result<u64> {
        Ok(ChamadoEntity::find()
            .filter(ChamadoColumn::TechnicianId.eq(technician_id))
            .filter(ChamadoColumn::Status.eq(TicketStatus::InProgress as i32))
            .count(self.db.get_connection())
            .await?)
    }
}
