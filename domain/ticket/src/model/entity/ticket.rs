use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use database_model::chamado;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A support ticket (chamado). Exactly one requester, at most one assigned
/// technician at a time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Ticket {
    pub id: Uuid,
    /// Unique human-facing order number.
    pub order_number: String,
    pub description: String,
    pub status: TicketStatus,
    pub requester_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub closure_description: Option<String>,
    pub created_time: DateTime<Utc>,
    pub last_modified_time: DateTime<Utc>,
    pub closed_time: Option<DateTime<Utc>>,
}

/// Ticket lifecycle: `OPEN ⇄ REOPENED → IN_PROGRESS → CLOSED`, where CLOSED
/// is terminal unless the ticket is explicitly reopened.
#[derive(
    FromPrimitive, ToPrimitive, Copy, Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    Reopened,
    InProgress,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::Reopened => "REOPENED",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Closed => "CLOSED",
        }
    }

    pub fn can_transition_to(&self, to: TicketStatus) -> bool {
        use TicketStatus::*;
        matches!(
            (self, to),
            (Open, InProgress) | (Reopened, InProgress) | (InProgress, Closed) | (Closed, Reopened)
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "OPEN" => TicketStatus::Open,
            "REOPENED" => TicketStatus::Reopened,
            "IN_PROGRESS" => TicketStatus::InProgress,
            "CLOSED" => TicketStatus::Closed,
            other => return Err(anyhow!("unknown ticket status: {other}")),
        })
    }
}

impl TryFrom<chamado::Model> for Ticket {
    type Error = anyhow::Error;

    fn try_from(model: chamado::Model) -> Result<Self, Self::Error> {
        let chamado::Model {
            id,
            order_number,
            description,
            status,
            requester_id,
            technician_id,
            closure_description,
            created_time,
            last_modified_time,
            closed_time,
        } = model;

        Ok(Self {
            id,
            order_number,
            description,
            status: TicketStatus::from_i32(status)
                .ok_or(anyhow!("wrong ticket status value: {status}"))?,
            requester_id,
            technician_id,
            closure_description,
            created_time,
            last_modified_time,
            closed_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_transitions() {
        use TicketStatus::*;
        assert!(Open.can_transition_to(InProgress));
        assert!(Reopened.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Closed));
        assert!(Closed.can_transition_to(Reopened));
    }

    #[test]
    fn illegal_transitions() {
        use TicketStatus::*;
        assert!(!Open.can_transition_to(Closed));
        assert!(!Open.can_transition_to(Reopened));
        assert!(!Closed.can_transition_to(InProgress));
        assert!(!Closed.can_transition_to(Open));
        assert!(!InProgress.can_transition_to(Open));
        assert!(!InProgress.can_transition_to(Reopened));
    }

    #[test]
    fn status_wire_names_round_trip() {
        for status in [
            TicketStatus::Open,
            TicketStatus::Reopened,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
        assert!("EM_ANDAMENTO".parse::<TicketStatus>().is_err());
    }
}
