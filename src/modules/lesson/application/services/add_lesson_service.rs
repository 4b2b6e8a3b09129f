use async_trait::async_trait;

use crate::lesson::application::ports::{
    incoming::use_cases::{AddLessonCommand, AddLessonError, AddLessonUseCase},
    outgoing::{LessonRecord, LessonRepository},
};

#[derive(Debug, Clone)]
pub struct AddLessonService<R>
where
    R: LessonRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddLessonService<R>
where
    R: LessonRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddLessonUseCase for AddLessonService<R>
where
    R: LessonRepository + Send + Sync,
{
    async fn execute(&self, command: AddLessonCommand) -> Result<LessonRecord, AddLessonError> {
        self.repository
            .create_lesson(command.name().to_string())
            .await
            .map_err(|e| AddLessonError::RepositoryError(e.to_string()))
    }
}
