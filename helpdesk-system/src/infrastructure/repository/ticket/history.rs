use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain_ticket::model::entity::{TicketHistoryEntry, TicketStatus};
use domain_ticket::repository::TicketHistoryRepo;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::Collection;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::infrastructure::database::DocumentStore;

const HISTORY_COLLECTION: &str = "ticket_history";

/// Wire shape of a history entry in the document store. Statuses go in as
/// the same integer values the relational side uses.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketHistoryDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub from_status: Option<i32>,
    pub to_status: i32,
    pub description: String,
    pub author_id: Uuid,
    pub author_name: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_time: DateTime<Utc>,
}

impl From<&TicketHistoryEntry> for TicketHistoryDocument {
    fn from(entry: &TicketHistoryEntry) -> Self {
        Self {
            id: entry.id,
            ticket_id: entry.ticket_id,
            from_status: entry.from_status.map(|status| status as i32),
            to_status: entry.to_status as i32,
            description: entry.description.clone(),
            author_id: entry.author_id,
            author_name: entry.author_name.clone(),
            created_time: entry.created_time,
        }
    }
}

impl TryFrom<TicketHistoryDocument> for TicketHistoryEntry {
    type Error = anyhow::Error;

    fn try_from(doc: TicketHistoryDocument) -> Result<Self, Self::Error> {
        let from_status = doc
            .from_status
            .map(|value| {
                TicketStatus::from_i32(value)
                    .ok_or(anyhow::anyhow!("wrong history status value: {value}"))
            })
            .transpose()?;
        let to_status = TicketStatus::from_i32(doc.to_status)
            .ok_or(anyhow::anyhow!("wrong history status value: {}", doc.to_status))?;
        Ok(Self {
            id: doc.id,
            ticket_id: doc.ticket_id,
            from_status,
            to_status,
            description: doc.description,
            author_id: doc.author_id,
            author_name: doc.author_name,
            created_time: doc.created_time,
        })
    }
}

pub struct MongoHistoryRepo {
    collection: Collection<TicketHistoryDocument>,
}

impl MongoHistoryRepo {
    pub fn new(store: &DocumentStore) -> Self {
        Self {
            collection: store.collection(HISTORY_COLLECTION),
        }
    }

    /// Maintenance-only wipe; the serving paths never delete history.
    pub async fn purge(&self) -> anyhow::Result<u64> {
        let result = self.collection.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl TicketHistoryRepo for MongoHistoryRepo {
    async fn append(&self, entry: &TicketHistoryEntry) -> anyhow::Result<()> {
        self.collection.insert_one(TicketHistoryDocument::from(entry), None).await?;
        Ok(())
    }

    async fn list_by_ticket(&self, ticket_id: Uuid) -> anyhow::Result<Vec<TicketHistoryEntry>> {
        let filter = doc! { "ticketId": ticket_id.to_string() };
        let options = FindOptions::builder().sort(doc! { "createdTime": 1 }).build();
        let mut cursor = self.collection.find(filter, options).await?;
        let mut entries = vec![];
        while let Some(document) = cursor.try_next().await? {
            entries.push(document.try_into()?);
        }
        Ok(entries)
    }
}
