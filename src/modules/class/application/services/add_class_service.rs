use async_trait::async_trait;

use crate::class::application::ports::{
    incoming::use_cases::{AddClassCommand, AddClassError, AddClassUseCase},
    outgoing::{ClassRecord, ClassRepository},
};

#[derive(Debug, Clone)]
pub struct AddClassService<R>
where
    R: ClassRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddClassService<R>
where
    R: ClassRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddClassUseCase for AddClassService<R>
where
    R: ClassRepository + Send + Sync,
{
    async fn execute(&self, command: AddClassCommand) -> Result<ClassRecord, AddClassError> {
        self.repository
            .create_class(command.name().to_string())
            .await
            .map_err(|e| AddClassError::RepositoryError(e.to_string()))
    }
}
