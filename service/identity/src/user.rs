use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_identity::command::{NewUser, UserUpdate};
use domain_identity::exception::{IdentityException, IdentityResult};
use domain_identity::model::entity::User;
use domain_identity::repository::UserRepo;
use domain_identity::service::UserService;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::auth::hash_password;

pub(crate) fn required(field: &str, value: &str) -> IdentityResult<()> {
    if value.trim().is_empty() {
        return Err(IdentityException::Validation {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Shared account-creation path for users and technicians.
pub(crate) async fn create_account(
    user_repo: &Arc<dyn UserRepo>,
    cmd: NewUser,
) -> IdentityResult<User> {
    required("nome", &cmd.name)?;
    required("email", &cmd.email)?;
    required("senha", &cmd.password)?;
    required("setor", &cmd.sector)?;
    if !cmd.email.contains('@') {
        return Err(IdentityException::Validation {
            field: "email".to_string(),
        });
    }
    if user_repo.find_by_email(&cmd.email).await?.is_some() {
        return Err(IdentityException::EmailTaken { email: cmd.email });
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        name: cmd.name,
        email: cmd.email,
        password_hash: hash_password(&cmd.password)?,
        role: cmd.role,
        sector: cmd.sector,
        active: true,
        created_time: now,
        last_modified_time: now,
    };
    user_repo.insert(&user).await?;
    Ok(user)
}

#[derive(TypedBuilder)]
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepo>,
}

impl UserServiceImpl {
    async fn load(&self, id: Uuid) -> IdentityResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or(IdentityException::UserNotFound { id })
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create(&self, cmd: NewUser) -> IdentityResult<User> {
        create_account(&self.user_repo, cmd).await
    }

    async fn get(&self, id: Uuid) -> IdentityResult<User> {
        self.load(id).await
    }

    async fn list(&self) -> IdentityResult<Vec<User>> {
        Ok(self.user_repo.get_all().await?)
    }

    async fn update(&self, id: Uuid, cmd: UserUpdate) -> IdentityResult<User> {
        let mut user = self.load(id).await?;
        if let Some(name) = cmd.name {
            required("nome", &name)?;
            user.name = name;
        }
        if let Some(sector) = cmd.sector {
            required("setor", &sector)?;
            user.sector = sector;
        }
        if let Some(password) = cmd.password {
            required("senha", &password)?;
            user.password_hash = hash_password(&password)?;
        }
        if let Some(role) = cmd.role {
            user.role = role;
        }
        if let Some(active) = cmd.active {
            user.active = active;
        }
        user.last_modified_time = Utc::now();
        self.user_repo.update(&user).await?;
        Ok(user)
    }

    async fn deactivate(&self, id: Uuid) -> IdentityResult<()> {
        let mut user = self.load(id).await?;
        user.active = false;
        user.last_modified_time = Utc::now();
        self.user_repo.update(&user).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_identity::mock::MockUserRepo;
    use domain_identity::model::entity::Role;

    fn new_user() -> NewUser {
        NewUser {
            name: "Maria".to_string(),
            email: "maria@helpme.dev".to_string(),
            password: "s3nh4-forte".to_string(),
            sector: "Financeiro".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn create_hashes_the_password_and_activates_the_account() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_email().returning(|_| Ok(None));
        user_repo.expect_insert().times(1).returning(|user| Ok(user.id));
        let service = UserServiceImpl::builder().user_repo(Arc::new(user_repo)).build();

        let user = service.create(new_user()).await.unwrap();
        assert!(user.active);
        assert_ne!(user.password_hash, "s3nh4-forte");
        assert!(crate::auth::verify_password("s3nh4-forte", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn create_rejects_duplicated_email() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_email().returning(|email| {
            Ok(Some(User {
                email: email.to_string(),
                ..Default::default()
            }))
        });
        let service = UserServiceImpl::builder().user_repo(Arc::new(user_repo)).build();

        let err = service.create(new_user()).await;
        assert!(matches!(err, Err(IdentityException::EmailTaken { .. })));
    }

    #[tokio::test]
    async fn create_rejects_blank_fields() {
        let service = UserServiceImpl::builder()
            .user_repo(Arc::new(MockUserRepo::new()))
            .build();

        let mut cmd = new_user();
        cmd.name = "  ".to_string();
        match service.create(cmd).await {
            Err(IdentityException::Validation { field }) => assert_eq!(field, "nome"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn deactivate_keeps_the_row_and_flips_the_flag() {
        let id = Uuid::new_v4();
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_id().returning(move |id| {
            Ok(Some(User {
                id,
                active: true,
                ..Default::default()
            }))
        });
        user_repo
            .expect_update()
            .times(1)
            .withf(|user| !user.active)
            .returning(|_| Ok(()));
        let service = UserServiceImpl::builder().user_repo(Arc::new(user_repo)).build();

        service.deactivate(id).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_id().returning(|_| Ok(None));
        let service = UserServiceImpl::builder().user_repo(Arc::new(user_repo)).build();

        let err = service.get(Uuid::new_v4()).await;
        assert!(matches!(err, Err(IdentityException::UserNotFound { .. })));
    }
}
