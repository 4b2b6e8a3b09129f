use async_trait::async_trait;

use crate::auth::application::{domain::Email, ports::outgoing::UserSummary};

use super::register_user::RegisterCommandError;

//
// ──────────────────────────────────────────────────────────
// Update User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    user_id: i32,
    name: String,
    email: Email,
    password: Option<String>,
    img_url: Option<String>,
}

impl UpdateUserCommand {
    pub fn new(
        user_id: i32,
        name: String,
        email: String,
        password: Option<String>,
        img_url: Option<String>,
    ) -> Result<Self, RegisterCommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegisterCommandError::EmptyName);
        }

        let email = Email::parse(&email).ok_or(RegisterCommandError::InvalidEmail)?;

        // An empty string means "no new password", same as omitting it
        let password = password.filter(|p| !p.is_empty());
        let img_url = img_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(Self {
            user_id,
            name: name.to_string(),
            email,
            password,
            img_url,
        })
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn img_url(&self) -> Option<&str> {
        self.img_url.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserError {
    #[error("user not found")]
    UserNotFound,

    #[error("email already registered")]
    EmailAlreadyRegistered,

    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserSummary, UpdateUserError>;
}
