use async_trait::async_trait;

use crate::exception::IdentityResult;
use crate::model::vo::TokenPair;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Checks the credential pair and issues an access/refresh token pair.
    /// Failures are audited with the caller ip and attempted e-mail.
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        client_ip: &str,
    ) -> IdentityResult<TokenPair>;

    /// Trades a still-valid refresh token for a fresh pair, rotating the
    /// stored session.
    async fn refresh(&self, refresh_token: &str) -> IdentityResult<TokenPair>;
}
