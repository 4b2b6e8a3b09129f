use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Who a session token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: i32,
    pub email: String,
    pub is_admin: bool,
}

/// Structure for JWT Claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: i32,       // User ID
    pub email: String,
    pub is_admin: bool,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds, reused as the cookie Max-Age.
    pub expires_in: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, identity: &SessionIdentity) -> Result<IssuedToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
