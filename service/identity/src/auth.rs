use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use domain_identity::exception::{IdentityException, IdentityResult};
use domain_identity::model::entity::User;
use domain_identity::model::vo::{TokenKind, TokenPair};
use domain_identity::repository::{SessionStore, UserRepo};
use domain_identity::service::AuthService;
use tracing::warn;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::token::TokenSettings;

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?
        .to_string())
}

pub fn verify_password(password: &str, digest: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(digest).map_err(|e| anyhow::anyhow!("stored digest unreadable: {e}"))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

fn session_key(user_id: Uuid, jti: Uuid) -> String {
    format!("session_{user_id}_{jti}")
}

#[derive(TypedBuilder)]
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepo>,
    sessions: Arc<dyn SessionStore>,
    tokens: TokenSettings,
}

impl AuthServiceImpl {
    async fn issue_pair(&self, user: &User) -> IdentityResult<TokenPair> {
        let (access_token, _) = self.tokens.issue(user, TokenKind::Access)?;
        let (refresh_token, jti) = self.tokens.issue(user, TokenKind::Refresh)?;
        self.sessions
            .put(
                &session_key(user.id, jti),
                "1",
                self.tokens.refresh_exp_secs as u64,
            )
            .await?;
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        client_ip: &str,
    ) -> IdentityResult<TokenPair> {
        // Unknown account, deactivated account and wrong password all look
        // the same from outside; the audit log keeps the distinction.
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) if user.active => user,
            _ => {
                warn!(ip = client_ip, email, "login failed: unknown or inactive account");
                return Err(IdentityException::InvalidCredentials);
            }
        };
        if !verify_password(password, &user.password_hash)? {
            warn!(ip = client_ip, email, "login failed: wrong password");
            return Err(IdentityException::InvalidCredentials);
        }
        self.issue_pair(&user).await
    }

    async fn refresh(&self, refresh_token: &str) -> IdentityResult<TokenPair> {
        let claims = match self.tokens.decode(refresh_token) {
            Ok(claims) => claims,
            Err(_) => return Err(IdentityException::SessionExpired),
        };
        if claims.kind != TokenKind::Refresh {
            return Err(IdentityException::SessionExpired);
        }
        let key = session_key(claims.sub, claims.jti);
        if self.sessions.get(&key).await?.is_none() {
            return Err(IdentityException::SessionExpired);
        }
        // Rotation: the old session dies with this exchange.
        self.sessions.delete(&key).await?;
        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .filter(|user| user.active)
            .ok_or(IdentityException::InvalidCredentials)?;
        self.issue_pair(&user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_identity::mock::{MockSessionStore, MockUserRepo};
    use domain_identity::model::entity::Role;

    fn tokens() -> TokenSettings {
        TokenSettings {
            secret: "test-secret".to_string(),
            issuer: "help-me".to_string(),
            access_exp_secs: 900,
            refresh_exp_secs: 7 * 86400,
            leeway: 60,
        }
    }

    fn requester(password: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Maria".to_string(),
            email: "maria@helpme.dev".to_string(),
            password_hash: hash_password(password).unwrap(),
            role: Role::User,
            active: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn unknown_email_is_invalid_credentials() {
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_email().returning(|_| Ok(None));
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .sessions(Arc::new(MockSessionStore::new()))
            .tokens(tokens())
            .build();

        let err = service.authenticate("ghost@helpme.dev", "whatever", "10.0.0.1").await;
        assert!(matches!(err, Err(IdentityException::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let user = requester("right-password");
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .sessions(Arc::new(MockSessionStore::new()))
            .tokens(tokens())
            .build();

        let err = service.authenticate("maria@helpme.dev", "wrong-password", "10.0.0.1").await;
        assert!(matches!(err, Err(IdentityException::InvalidCredentials)));
    }

    #[tokio::test]
    async fn inactive_account_is_invalid_credentials() {
        let mut user = requester("right-password");
        user.active = false;
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .sessions(Arc::new(MockSessionStore::new()))
            .tokens(tokens())
            .build();

        let err = service.authenticate("maria@helpme.dev", "right-password", "10.0.0.1").await;
        assert!(matches!(err, Err(IdentityException::InvalidCredentials)));
    }

    #[tokio::test]
    async fn successful_login_issues_both_tokens_and_stores_the_session() {
        let user = requester("right-password");
        let expected = user.clone();
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let mut sessions = MockSessionStore::new();
        sessions.expect_put().times(1).returning(|_, _, _| Ok(()));
        let settings = tokens();
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .sessions(Arc::new(sessions))
            .tokens(settings.clone())
            .build();

        let pair = service
            .authenticate("maria@helpme.dev", "right-password", "10.0.0.1")
            .await
            .unwrap();
        let access = settings.decode(&pair.access_token).unwrap();
        assert_eq!(access.sub, expected.id);
        assert_eq!(access.kind, TokenKind::Access);
        let refresh = settings.decode(&pair.refresh_token).unwrap();
        assert_eq!(refresh.kind, TokenKind::Refresh);
    }

    #[tokio::test]
    async fn refresh_rejects_access_tokens() {
        let user = requester("right-password");
        let settings = tokens();
        let (access_token, _) = settings.issue(&user, TokenKind::Access).unwrap();
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(MockUserRepo::new()))
            .sessions(Arc::new(MockSessionStore::new()))
            .tokens(settings)
            .build();

        let err = service.refresh(&access_token).await;
        assert!(matches!(err, Err(IdentityException::SessionExpired)));
    }

    #[tokio::test]
    async fn refresh_rotates_the_stored_session() {
        let user = requester("right-password");
        let found = user.clone();
        let settings = tokens();
        let (refresh_token, _) = settings.issue(&user, TokenKind::Refresh).unwrap();

        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        let mut sessions = MockSessionStore::new();
        sessions.expect_get().times(1).returning(|_| Ok(Some("1".to_string())));
        sessions.expect_delete().times(1).returning(|_| Ok(()));
        sessions.expect_put().times(1).returning(|_, _, _| Ok(()));
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(user_repo))
            .sessions(Arc::new(sessions))
            .tokens(settings)
            .build();

        service.refresh(&refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn refresh_without_stored_session_is_rejected() {
        let user = requester("right-password");
        let settings = tokens();
        let (refresh_token, _) = settings.issue(&user, TokenKind::Refresh).unwrap();

        let mut sessions = MockSessionStore::new();
        sessions.expect_get().returning(|_| Ok(None));
        let service = AuthServiceImpl::builder()
            .user_repo(Arc::new(MockUserRepo::new()))
            .sessions(Arc::new(sessions))
            .tokens(settings)
            .build();

        let err = service.refresh(&refresh_token).await;
        assert!(matches!(err, Err(IdentityException::SessionExpired)));
    }
}
