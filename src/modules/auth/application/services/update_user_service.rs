use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::password_long_enough,
    ports::{
        incoming::use_cases::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase},
        outgoing::{PasswordHasher, UpdateUserData, UserRepository, UserRepositoryError, UserSummary},
    },
};

#[derive(Clone)]
pub struct UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<R> UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> UpdateUserUseCase for UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateUserCommand) -> Result<UserSummary, UpdateUserError> {
        let password_hash = match command.password() {
            Some(password) => {
                if !password_long_enough(password) {
                    return Err(UpdateUserError::PasswordTooShort);
                }
                let hash = self
                    .hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateUserError::HashingFailed(e.to_string()))?;
                Some(hash)
            }
            None => None,
        };

        let data = UpdateUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            img_url: command.img_url().map(str::to_string),
            password_hash,
        };

        self.repository
            .update_user(command.user_id(), data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
                UserRepositoryError::EmailAlreadyExists => UpdateUserError::EmailAlreadyRegistered,
                other => UpdateUserError::RepositoryError(other.to_string()),
            })
    }
}
