use async_trait::async_trait;

use crate::auth::application::{domain::Email, ports::outgoing::UserProfile};

use super::register_user::RegisterCommandError;

#[derive(Debug, Clone)]
pub struct RegisterAdminCommand {
    name: String,
    email: Email,
}

impl RegisterAdminCommand {
    pub fn new(name: String, email: String) -> Result<Self, RegisterCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterCommandError::EmptyName);
        }

        let email = Email::parse(&email).ok_or(RegisterCommandError::InvalidEmail)?;

        Ok(Self {
            name: name.to_string(),
            email,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterAdminError {
    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin accounts start unverified with the configured default password and
/// are activated through the OTP flow.
#[async_trait]
pub trait RegisterAdminUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterAdminCommand,
    ) -> Result<UserProfile, RegisterAdminError>;
}
