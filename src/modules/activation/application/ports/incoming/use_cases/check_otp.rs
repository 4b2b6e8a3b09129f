use async_trait::async_trait;

use crate::activation::application::domain::entities::OtpCode;

//
// ──────────────────────────────────────────────────────────
// Check OTP Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CheckOtpCommand {
    user_id: i32,
    otp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckOtpCommandError {
    #[error("id must be a positive id")]
    InvalidUserId,

    #[error("otp cannot be empty")]
    EmptyOtp,

    #[error("otp must be 6 digits")]
    MalformedOtp,
}

impl CheckOtpCommand {
    pub fn new(user_id: i32, otp: String) -> Result<Self, CheckOtpCommandError> {
        if user_id < 1 {
            return Err(CheckOtpCommandError::InvalidUserId);
        }
        let otp = otp.trim().to_string();
        if otp.is_empty() {
            return Err(CheckOtpCommandError::EmptyOtp);
        }
        if OtpCode::parse(&otp).is_none() {
            return Err(CheckOtpCommandError::MalformedOtp);
        }
        Ok(Self { user_id, otp })
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckOtpError {
    #[error("user not found")]
    UserNotFound,

    #[error("OTP not found")]
    OtpNotFound,

    #[error("OTP does not match")]
    OtpMismatch,

    #[error("OTP has expired")]
    OtpExpired,

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

/// Marks the user verified when the candidate matches an unexpired code.
/// The code is left in place and keeps validating until it expires.
#[async_trait]
pub trait CheckOtpUseCase: Send + Sync {
    async fn execute(&self, command: CheckOtpCommand) -> Result<(), CheckOtpError>;
}
