use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Role;

/// JWT payload issued on login and validated on every authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// user uuid
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub kind: TokenKind,
    /// issuer
    pub iss: String,
    /// issued at, unix seconds
    pub iat: i64,
    /// expiry, unix seconds
    pub exp: i64,
    /// token id; refresh tokens are tracked by this id in the session store
    pub jti: Uuid,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Short-lived access token plus its longer-lived refresh companion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Caller identity resolved from a validated access token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// A technician together with its configured shift, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianInfo {
    pub user: super::entity::User,
    pub shift: Option<super::entity::Shift>,
}
