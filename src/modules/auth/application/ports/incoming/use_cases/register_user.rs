use async_trait::async_trait;

use crate::auth::application::{domain::Email, ports::outgoing::UserProfile};

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: Email,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl RegisterUserCommand {
    pub fn new(name: String, email: String, password: String) -> Result<Self, RegisterCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterCommandError::EmptyName);
        }

        let email = Email::parse(&email).ok_or(RegisterCommandError::InvalidEmail)?;

        Ok(Self {
            name: name.to_string(),
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserError {
    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Self-registration: the account is created verified.
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<UserProfile, RegisterUserError>;
}
