use std::sync::Arc;

use anyhow::Context;
use sea_orm::{ConnectOptions, DatabaseConnection};
use typed_builder::TypedBuilder;

use crate::infrastructure::config::{masked_url, DatabaseConfig};

/// Owner of the process-wide connection pool. Built once by the service
/// provider and torn down through [`Database::close`] on shutdown.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn new(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let mut options = ConnectOptions::new(cfg.url.clone());
        options.max_connections(cfg.max_connections);
        let connection = sea_orm::Database::connect(options)
            .await
            .with_context(|| format!("could not connect to database at {}", masked_url(&cfg.url)))?;
        Ok(Database { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    pub async fn close(&self) -> anyhow::Result<()> {
        self.connection.clone().close().await?;
        Ok(())
    }
}

/// Relational repository handle; the entity-specific trait impls live under
/// `infrastructure/repository`.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
}
