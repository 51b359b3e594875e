use database_model::prelude::*;
use domain_ticket::model::entity::Service;
use domain_ticket::repository::ServiceRepo;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, Condition, QueryOrder};

use crate::infrastructure::database::OrmRepo;

fn active_model(service: &Service) -> ServicoActiveModel {
    ServicoActiveModel {
        id: Set(service.id),
        name: Set(service.name.clone()),
        description: Set(service.description.clone()),
        active: Set(service.active),
    }
}

#[async_trait::async_trait]
impl ServiceRepo for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Service>> {
        Ok(ServicoEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(Service::from))
    }

    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Service>> {
        Ok(ServicoEntity::find()
            .filter(ServicoColumn::Name.eq(name))
            .one(self.db.get_connection())
            .await?
            .map(Service::from))
    }

    async fn get_all(&self, only_active: bool) -> anyhow::Result<Vec<Service>> {
        let mut condition = Condition::all();
        if only_active {
            condition = condition.add(ServicoColumn::Active.eq(true));
        }
        Ok(ServicoEntity::find()
            .filter(condition)
            .order_by_asc(ServicoColumn::Name)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Service::from)
            .collect())
    }

    async fn insert(&self, service: &Service) -> anyhow::Result<Uuid> {
        ServicoEntity::insert(active_model(service)).exec(self.db.get_connection()).await?;
        Ok(service.id)
    }

    async fn update(&self, service: &Service) -> anyhow::Result<()> {
        ServicoEntity::update(active_model(service)).exec(self.db.get_connection()).await?;
        Ok(())
    }
}
