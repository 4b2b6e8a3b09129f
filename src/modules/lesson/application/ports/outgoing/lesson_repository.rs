use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LessonRecord {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Matematika")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LessonRepositoryError {
    #[error("lesson not found")]
    LessonNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create_lesson(&self, name: String) -> Result<LessonRecord, LessonRepositoryError>;

    async fn delete_lesson(&self, lesson_id: i32) -> Result<(), LessonRepositoryError>;
}
