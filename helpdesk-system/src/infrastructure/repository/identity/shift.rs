use database_model::prelude::*;
use domain_identity::model::entity::Shift;
use domain_identity::repository::ShiftRepo;
use sea_orm::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::infrastructure::database::OrmRepo;

fn active_model(shift: &Shift) -> ExpedienteActiveModel {
    ExpedienteActiveModel {
        id: Set(shift.id),
        technician_id: Set(shift.technician_id),
        start_time: Set(shift.start_time),
        end_time: Set(shift.end_time),
    }
}

#[async_trait::async_trait]
impl ShiftRepo for OrmRepo {
    async fn find_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Option<Shift>> {
        Ok(ExpedienteEntity::find()
            .filter(ExpedienteColumn::TechnicianId.eq(technician_id))
            .one(self.db.get_connection())
            .await?
            .map(Shift::from))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<Shift>> {
        Ok(ExpedienteEntity::find()
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(Shift::from)
            .collect())
    }

    async fn upsert(&self, shift: &Shift) -> anyhow::Result<()> {
        let existing = ExpedienteEntity::find_by_id(shift.id).one(self.db.get_connection()).await?;
        if existing.is_some() {
            ExpedienteEntity::update(active_model(shift)).exec(self.db.get_connection()).await?;
        } else {
            ExpedienteEntity::insert(active_model(shift)).exec(self.db.get_connection()).await?;
        }
        Ok(())
    }
}
