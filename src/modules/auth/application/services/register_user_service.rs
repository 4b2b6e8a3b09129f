use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::password_long_enough,
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{NewUserData, PasswordHasher, UserProfile, UserRepository, UserRepositoryError},
    },
};

#[derive(Clone)]
pub struct RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserProfile, RegisterUserError> {
        if !password_long_enough(command.password()) {
            return Err(RegisterUserError::PasswordTooShort);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = NewUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            is_verified: true,
        };

        let created = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyRegistered,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = created.id, "User registered");
        Ok(created)
    }
}
