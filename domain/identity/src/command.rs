use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::entity::Role;

/// Admin-side account creation. `password` is raw here and hashed by the
/// service before it ever reaches a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub sector: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTechnician {
    pub name: String,
    pub email: String,
    pub password: String,
    pub sector: String,
}

/// Working-hours window for a technician's shift.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
