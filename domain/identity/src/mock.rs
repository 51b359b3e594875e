use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::model::entity::{Role, Shift, User};
use crate::repository::{SessionStore, ShiftRepo, UserRepo};

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
        async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
        async fn get_all(&self) -> anyhow::Result<Vec<User>>;
        async fn get_by_role(&self, role: Role) -> anyhow::Result<Vec<User>>;
        async fn insert(&self, user: &User) -> anyhow::Result<Uuid>;
        async fn update(&self, user: &User) -> anyhow::Result<()>;
    }
}

mock! {
    pub ShiftRepo {}
    #[async_trait]
    impl ShiftRepo for ShiftRepo {
        async fn find_by_technician(&self, technician_id: Uuid) -> anyhow::Result<Option<Shift>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Shift>>;
        async fn upsert(&self, shift: &Shift) -> anyhow::Result<()>;
    }
}

mock! {
    pub SessionStore {}
    #[async_trait]
    impl SessionStore for SessionStore {
        async fn put(&self, key: &str, value: &str, ttl_secs: u64) -> anyhow::Result<()>;
        async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
        async fn delete(&self, key: &str) -> anyhow::Result<()>;
    }
}
