use async_trait::async_trait;

use crate::class::application::ports::{
    incoming::use_cases::{DeleteClassError, DeleteClassUseCase},
    outgoing::{ClassRepository, ClassRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteClassService<R>
where
    R: ClassRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteClassService<R>
where
    R: ClassRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteClassUseCase for DeleteClassService<R>
where
    R: ClassRepository + Send + Sync,
{
    async fn execute(&self, class_id: i32) -> Result<(), DeleteClassError> {
        self.repository
            .delete_class(class_id)
            .await
            .map_err(|e| match e {
                ClassRepositoryError::ClassNotFound => DeleteClassError::ClassNotFound,
                other => DeleteClassError::RepositoryError(other.to_string()),
            })
    }
}
