use std::fmt;

use anyhow::anyhow;
use chrono::Utc;
use domain_identity::model::entity::User;
use domain_identity::model::vo::{Claims, TokenKind};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

/// HS256 signing and validation settings, shared between the token issuer
/// and the request middleware.
#[derive(Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub issuer: String,
    pub access_exp_secs: i64,
    pub refresh_exp_secs: i64,
    pub leeway: u64,
}

// The signing secret never reaches diagnostic output.
impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"******")
            .field("issuer", &self.issuer)
            .field("access_exp_secs", &self.access_exp_secs)
            .field("refresh_exp_secs", &self.refresh_exp_secs)
            .field("leeway", &self.leeway)
            .finish()
    }
}

impl TokenSettings {
    /// Signs a token of the given kind for the user, returning the token and
    /// its id.
    pub fn issue(&self, user: &User, kind: TokenKind) -> anyhow::Result<(String, Uuid)> {
        let now = Utc::now().timestamp();
        let lifetime = match kind {
            TokenKind::Access => self.access_exp_secs,
            TokenKind::Refresh => self.refresh_exp_secs,
        };
        let jti = Uuid::new_v4();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            kind,
            iss: self.issuer.clone(),
            iat: now,
            exp: now + lifetime,
            jti,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| anyhow!("token signing failed: {e}"))?;
        Ok((token, jti))
    }

    pub fn decode(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;
        validation.set_issuer(&[&self.issuer]);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| anyhow!("token rejected: {e}"))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_identity::model::entity::Role;

    fn settings() -> TokenSettings {
        TokenSettings {
            secret: "test-secret".to_string(),
            issuer: "help-me".to_string(),
            access_exp_secs: 900,
            refresh_exp_secs: 7 * 86400,
            leeway: 60,
        }
    }

    fn admin() -> User {
        User {
            id: Uuid::new_v4(),
            email: "admin@helpme.dev".to_string(),
            role: Role::Admin,
            ..Default::default()
        }
    }

    #[test]
    fn issued_token_round_trips_identity_and_role() {
        let settings = settings();
        let user = admin();
        let (token, jti) = settings.issue(&user, TokenKind::Access).unwrap();
        let claims = settings.decode(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.kind, TokenKind::Access);
        assert_eq!(claims.jti, jti);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let user = admin();
        let (token, _) = settings().issue(&user, TokenKind::Access).unwrap();
        let mut other = settings();
        other.secret = "another-secret".to_string();
        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let user = admin();
        let (token, _) = settings().issue(&user, TokenKind::Access).unwrap();
        let mut other = settings();
        other.issuer = "someone-else".to_string();
        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn debug_output_masks_the_secret() {
        let rendered = format!("{:?}", settings());
        assert!(!rendered.contains("test-secret"));
    }
}
