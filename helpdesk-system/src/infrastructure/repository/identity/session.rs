use async_trait::async_trait;
use domain_identity::repository::SessionStore;
use redis::Cmd;

use crate::infrastructure::database::RedisRepo;

const SESSION_KEY_PREFIX: &str = "helpme_";

#[async_trait]
impl SessionStore for RedisRepo {
    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> anyhow::Result<()> {
        let mut connection = self.client.get_connection()?;
        connection.check_open()?;
        connection.query::<()>(&Cmd::set_ex(
            format!("{SESSION_KEY_PREFIX}{key}"),
            value,
            ttl_secs,
        ))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let mut connection = self.client.get_connection()?;
        connection.check_open()?;
        Ok(connection.query::<Option<String>>(&Cmd::get(format!("{SESSION_KEY_PREFIX}{key}")))?)
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let mut connection = self.client.get_connection()?;
        connection.check_open()?;
        connection.query::<()>(&Cmd::del(format!("{SESSION_KEY_PREFIX}{key}")))?;
        Ok(())
    }
}
