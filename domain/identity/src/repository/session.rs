use async_trait::async_trait;

/// TTL'd key/value store for refresh-token sessions. Expiry is the store's
/// job; a `get` after the TTL elapses returns `None`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> anyhow::Result<()>;
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
}
