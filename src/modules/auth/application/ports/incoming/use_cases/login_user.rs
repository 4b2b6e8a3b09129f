use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    email: String,
    password: String,
}

impl LoginUserCommand {
    pub fn new(email: String, password: String) -> Self {
        Self {
            email: email.trim().to_string(),
            password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoginResult {
    pub id: i32,
    pub email: String,
    pub is_admin: bool,
    pub is_verified: bool,
    pub token: String,
    /// Session lifetime in seconds
    #[serde(skip)]
    pub expires_in: i64,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginUserError {
    #[error("user not found")]
    UserNotFound,

    #[error("wrong password")]
    WrongPassword,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token issuance failed: {0}")]
    TokenFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginUserCommand) -> Result<LoginResult, LoginUserError>;
}
