use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{RegisterAdminCommand, RegisterAdminError, RegisterAdminUseCase},
    outgoing::{NewUserData, PasswordHasher, UserProfile, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct RegisterAdminService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
    default_password: String,
}

impl<R> RegisterAdminService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>, default_password: String) -> Self {
        Self {
            repository,
            hasher,
            default_password,
        }
    }
}

#[async_trait]
impl<R> RegisterAdminUseCase for RegisterAdminService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterAdminCommand,
    ) -> Result<UserProfile, RegisterAdminError> {
        let password_hash = self
            .hasher
            .hash_password(&self.default_password)
            .await
            .map_err(|e| RegisterAdminError::HashingFailed(e.to_string()))?;

        let data = NewUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            is_verified: false,
        };

        let created = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::EmailAlreadyExists => RegisterAdminError::EmailAlreadyRegistered,
            other => RegisterAdminError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = created.id, "Account provisioned with default password, pending activation");
        Ok(created)
    }
}
