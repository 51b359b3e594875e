use chrono::NaiveTime;
use database_model::expediente;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A technician's working-hours window (expediente), one per technician.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<expediente::Model> for Shift {
    fn from(model: expediente::Model) -> Self {
        let expediente::Model {
            id,
            technician_id,
            start_time,
            end_time,
        } = model;

        Self {
            id,
            technician_id,
            start_time,
            end_time,
        }
    }
}
