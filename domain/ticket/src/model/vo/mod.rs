use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate counts backing the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub open: u64,
    pub reopened: u64,
    pub in_progress: u64,
    pub closed: u64,
    /// OPEN + REOPENED, the queue technicians pull from.
    pub open_queue_depth: u64,
    pub active_technicians: u64,
    pub active_services: u64,
    pub technician_load: Vec<TechnicianLoad>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianLoad {
    pub technician_id: Uuid,
    pub name: String,
    pub in_progress: u64,
}
