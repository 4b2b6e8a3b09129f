use async_trait::async_trait;

use super::LessonRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LessonQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LessonQuery: Send + Sync {
    /// All lessons ordered by id
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, LessonQueryError>;
}
