use database_model::prelude::*;
use domain_ticket::model::entity::ServiceOrder;
use domain_ticket::repository::ServiceOrderRepo;
use sea_orm::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::infrastructure::database::OrmRepo;

#[async_trait::async_trait]
impl ServiceOrderRepo for OrmRepo {
    async fn insert_many(&self, orders: &[ServiceOrder]) -> anyhow::Result<()> {
        if orders.is_empty() {
            return Ok(());
        }
        let models = orders.iter().map(|order| OrdemDeServicoActiveModel {
            id: Set(order.id),
            ticket_id: Set(order.ticket_id),
            service_id: Set(order.service_id),
        });
        OrdemDeServicoEntity::insert_many(models).exec(self.db.get_connection()).await?;
        Ok(())
    }

    async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<ServiceOrder>> {
        Ok(OrdemDeServicoEntity::find()
            .filter(OrdemDeServicoColumn::TicketId.eq(ticket_id))
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(ServiceOrder::from)
            .collect())
    }
}
