use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TicketStatus;

/// Append-only audit record of a ticket transition, kept in the document
/// store. Entries are never mutated or deleted; the author's display name is
/// the one current at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistoryEntry {
    pub id: Uuid,
    pub ticket_id: Uuid,
    /// `None` for the opening entry.
    pub from_status: Option<TicketStatus>,
    pub to_status: TicketStatus,
    pub description: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_time: DateTime<Utc>,
}
