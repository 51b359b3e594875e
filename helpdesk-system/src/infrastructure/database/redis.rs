use std::sync::Arc;

use redis::{from_redis_value, FromRedisValue, RedisResult};
use typed_builder::TypedBuilder;

use crate::infrastructure::config::RedisConfig;

#[derive(TypedBuilder)]
pub struct RedisRepo {
    pub client: Arc<RedisClient>,
}

#[derive(Clone)]
pub enum RedisClient {
    Single(redis::Client),
    Cluster(redis::cluster::ClusterClient),
}

pub enum RedisConnection {
    Single(redis::Connection),
    Cluster(redis::cluster::ClusterConnection),
}

impl RedisClient {
    /// One url opens a single-node client, several open a cluster client.
    pub fn open(cfg: &RedisConfig) -> anyhow::Result<Self> {
        let urls = cfg.urls.clone();
        Ok(if urls.len() == 1 {
            RedisClient::Single(redis::Client::open(urls.into_iter().next().unwrap())?)
        } else {
            RedisClient::Cluster(redis::cluster::ClusterClient::new(urls)?)
        })
    }

    pub fn get_connection(&self) -> RedisResult<RedisConnection> {
        match self {
            RedisClient::Single(s) => Ok(RedisConnection::Single(s.get_connection()?)),
            RedisClient::Cluster(c) => Ok(RedisConnection::Cluster(c.get_connection()?)),
        }
    }
}

impl RedisConnection {
    pub fn check_open(&self) -> anyhow::Result<()> {
        let flag = match self {
            RedisConnection::Single(sc) => redis::ConnectionLike::is_open(sc),
            RedisConnection::Cluster(cc) => redis::ConnectionLike::is_open(cc),
        };
        if !flag {
            anyhow::bail!("Redis connection is closed.");
        }
        Ok(())
    }

    pub fn query<T: FromRedisValue>(&mut self, cmd: &redis::Cmd) -> RedisResult<T> {
        match self {
            RedisConnection::Single(sc) => {
                from_redis_value(&redis::ConnectionLike::req_command(sc, cmd)?)
            }
            RedisConnection::Cluster(cc) => {
                from_redis_value(&redis::ConnectionLike::req_command(cc, cmd)?)
            }
        }
    }
}
