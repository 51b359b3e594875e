use anyhow::Context;
use mongodb::{Client, Collection};

use crate::infrastructure::config::{masked_url, MongoConfig};

/// Client for the document store holding the append-only ticket history.
pub struct DocumentStore {
    client: Client,
    database: mongodb::Database,
}

impl DocumentStore {
    pub async fn new(cfg: &MongoConfig) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(&cfg.uri).await.with_context(|| {
            format!("could not connect to document store at {}", masked_url(&cfg.uri))
        })?;
        let database = client.database(&cfg.database);
        Ok(Self { client, database })
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}
