use async_trait::async_trait;

use crate::lesson::application::ports::outgoing::LessonRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetLessonsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetLessonsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<LessonRecord>, GetLessonsError>;
}
