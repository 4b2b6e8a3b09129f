use async_trait::async_trait;

use crate::auth::application::domain::Email;

//
// ──────────────────────────────────────────────────────────
// Send OTP Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SendOtpCommand {
    email: Email,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendOtpCommandError {
    #[error("invalid email format")]
    InvalidEmail,
}

impl SendOtpCommand {
    pub fn new(email: String) -> Result<Self, SendOtpCommandError> {
        let email = Email::parse(&email).ok_or(SendOtpCommandError::InvalidEmail)?;
        Ok(Self { email })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendOtpError {
    #[error("user not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Failed to store OTP: {0}")]
    StoreFailed(String),

    /// The code is already stored when delivery fails.
    #[error("Failed to send OTP email: {0}")]
    MailFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SendOtpUseCase: Send + Sync {
    async fn execute(&self, command: SendOtpCommand) -> Result<(), SendOtpError>;
}
