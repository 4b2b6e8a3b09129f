use async_trait::async_trait;

use crate::lesson::application::ports::{
    incoming::use_cases::{DeleteLessonError, DeleteLessonUseCase},
    outgoing::{LessonRepository, LessonRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteLessonService<R>
where
    R: LessonRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteLessonService<R>
where
    R: LessonRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteLessonUseCase for DeleteLessonService<R>
where
    R: LessonRepository + Send + Sync,
{
    async fn execute(&self, lesson_id: i32) -> Result<(), DeleteLessonError> {
        self.repository
            .delete_lesson(lesson_id)
            .await
            .map_err(|e| match e {
                LessonRepositoryError::LessonNotFound => DeleteLessonError::LessonNotFound,
                other => DeleteLessonError::RepositoryError(other.to_string()),
            })
    }
}
