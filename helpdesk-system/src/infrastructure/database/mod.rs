mod mongo;
mod orm;
mod redis;

#[rustfmt::skip]
pub use {
    mongo::DocumentStore,
    orm::{Database, OrmRepo},
    redis::{RedisClient, RedisConnection, RedisRepo},
};
