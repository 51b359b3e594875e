use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::usuario;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A support-desk account. Technicians and administrators are users with an
/// elevated role; accounts are deactivated, never removed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2id digest, never the raw password.
    pub password_hash: String,
    pub role: Role,
    pub sector: String,
    pub active: bool,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
}

/// Closed set of roles; route access is decided by exhaustive matches on
/// this enum, never on raw strings.
#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Default, Debug, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Technician,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Technician => "TECHNICIAN",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "USER" => Role::User,
            "TECHNICIAN" => Role::Technician,
            "ADMIN" => Role::Admin,
            other => return Err(anyhow!("unknown role: {other}")),
        })
    }
}

impl TryFrom<usuario::Model> for User {
    type Error = anyhow::Error;

    fn try_from(model: usuario::Model) -> Result<Self, Self::Error> {
        let usuario::Model {
            id,
            name,
            email,
            password_hash,
            role,
            sector,
            active,
            created_time,
            last_modified_time,
        } = model;

        Ok(Self {
            id,
            name,
            email,
            password_hash,
            role: Role::from_i32(role).ok_or(anyhow!("wrong role value: {role}"))?,
            sector,
            active,
            created_time,
            last_modified_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_name() {
        for role in [Role::User, Role::Technician, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("MANAGER".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
    }
}
