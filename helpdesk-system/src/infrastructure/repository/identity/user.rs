use database_model::prelude::*;
use domain_identity::model::entity::{Role, User};
use domain_identity::repository::UserRepo;
use sea_orm::prelude::*;
use sea_orm::{ActiveValue::Set, QueryOrder};

use crate::infrastructure::database::OrmRepo;

fn active_model(user: &User) -> UsuarioActiveModel {
    UsuarioActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        role: Set(user.role as i32),
        sector: Set(user.sector.clone()),
        active: Set(user.active),
        created_time: Set(user.created_time),
        last_modified_time: Set(user.last_modified_time),
    }
}

#[async_trait::async_trait]
impl UserRepo for OrmRepo {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        UsuarioEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        UsuarioEntity::find()
            .filter(UsuarioColumn::Email.eq(email))
            .one(self.db.get_connection())
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn get_all(&self) -> anyhow::Result<Vec<User>> {
        let res = UsuarioEntity::find()
            .order_by_asc(UsuarioColumn::Name)
            .all(self.db.get_connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn get_by_role(&self, role: Role) -> anyhow::Result<Vec<User>> {
        let res = UsuarioEntity::find()
            .filter(UsuarioColumn::Role.eq(role as i32))
            .order_by_asc(UsuarioColumn::Name)
            .all(self.db.get_connection())
            .await?;
        let mut r = vec![];
        for el in res.into_iter() {
            r.push(el.try_into()?);
        }
        Ok(r)
    }

    async fn insert(&self, user: &User) -> anyhow::Result<Uuid> {
        UsuarioEntity::insert(active_model(user)).exec(self.db.get_connection()).await?;
        Ok(user.id)
    }

    async fn update(&self, user: &User) -> anyhow::Result<()> {
        UsuarioEntity::update(active_model(user)).exec(self.db.get_connection()).await?;
        Ok(())
    }
}
