use database_model::servico;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog service tickets can be opened against.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl From<servico::Model> for Service {
    fn from(model: servico::Model) -> Self {
        let servico::Model {
            id,
            name,
            description,
            active,
        } = model;

        Self {
            id,
            name,
            description,
            active,
        }
    }
}
