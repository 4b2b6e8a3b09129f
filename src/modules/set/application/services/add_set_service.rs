use async_trait::async_trait;

use crate::set::application::ports::{
    incoming::use_cases::{AddSetCommand, AddSetError, AddSetUseCase},
    outgoing::{NewSetData, SetRecord, SetRepository, SetRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AddSetService<R>
where
    R: SetRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddSetService<R>
where
    R: SetRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddSetUseCase for AddSetService<R>
where
    R: SetRepository + Send + Sync,
{
    async fn execute(&self, command: AddSetCommand) -> Result<SetRecord, AddSetError> {
        let data = NewSetData {
            name: command.name().to_string(),
            lesson_id: command.lesson_id(),
            class_id: command.class_id(),
            is_quiz: command.is_quiz(),
        };

        self.repository.create_set(data).await.map_err(|e| match e {
            SetRepositoryError::InvalidReference => AddSetError::LessonOrClassMissing,
            other => AddSetError::RepositoryError(other.to_string()),
        })
    }
}
