use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSetData {
    pub name: String,
    pub lesson_id: i32,
    pub class_id: i32,
    pub is_quiz: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SetRecord {
    pub id: i32,
    #[schema(example = "Latihan 1")]
    pub name: String,
    pub lesson_id: i32,
    pub class_id: i32,
    pub is_quiz: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetRepositoryError {
    #[error("set not found")]
    SetNotFound,

    /// The referenced lesson or class row is missing
    #[error("lesson or class does not exist")]
    InvalidReference,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SetRepository: Send + Sync {
    async fn create_set(&self, data: NewSetData) -> Result<SetRecord, SetRepositoryError>;

    async fn delete_set(&self, set_id: i32) -> Result<(), SetRepositoryError>;
}
