use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteLessonError {
    #[error("lesson not found")]
    LessonNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteLessonUseCase: Send + Sync {
    async fn execute(&self, lesson_id: i32) -> Result<(), DeleteLessonError>;
}
