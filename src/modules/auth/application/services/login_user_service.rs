use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{LoginResult, LoginUserCommand, LoginUserError, LoginUserUseCase},
    outgoing::{PasswordHasher, SessionIdentity, TokenProvider, UserQuery},
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginUserCommand) -> Result<LoginResult, LoginUserError> {
        let credentials = self
            .query
            .find_credentials_by_email(command.email())
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?
            .ok_or(LoginUserError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(command.password(), &credentials.password_hash)
            .await
            .map_err(|e| LoginUserError::HashingFailed(e.to_string()))?;

        if !matches {
            tracing::debug!(user_id = credentials.id, "Login rejected: wrong password");
            return Err(LoginUserError::WrongPassword);
        }

        let issued = self
            .token_provider
            .issue_session_token(&SessionIdentity {
                user_id: credentials.id,
                email: credentials.email.clone(),
                is_admin: credentials.is_admin,
            })
            .map_err(|e| LoginUserError::TokenFailed(e.to_string()))?;

        Ok(LoginResult {
            id: credentials.id,
            email: credentials.email,
            is_admin: credentials.is_admin,
            is_verified: credentials.is_verified,
            token: issued.token,
            expires_in: issued.expires_in,
        })
    }
}
