use database_model::ordem_de_servico;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Join entity allocated at ticket-open time, one per selected service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub service_id: Uuid,
}

impl From<ordem_de_servico::Model> for ServiceOrder {
    fn from(model: ordem_de_servico::Model) -> Self {
        let ordem_de_servico::Model {
            id,
            ticket_id,
            service_id,
        } = model;

        Self {
            id,
            ticket_id,
            service_id,
        }
    }
}
