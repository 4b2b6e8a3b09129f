use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<(), DeleteUserError> {
        self.repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id, "User deleted");
        Ok(())
    }
}
