use async_trait::async_trait;

use crate::set::application::ports::{
    incoming::use_cases::{DeleteSetError, DeleteSetUseCase},
    outgoing::{SetRepository, SetRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteSetService<R>
where
    R: SetRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteSetService<R>
where
    R: SetRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSetUseCase for DeleteSetService<R>
where
    R: SetRepository + Send + Sync,
{
    async fn execute(&self, set_id: i32) -> Result<(), DeleteSetError> {
        self.repository
            .delete_set(set_id)
            .await
            .map_err(|e| match e {
                SetRepositoryError::SetNotFound => DeleteSetError::SetNotFound,
                other => DeleteSetError::RepositoryError(other.to_string()),
            })
    }
}
