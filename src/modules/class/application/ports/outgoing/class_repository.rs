use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClassRecord {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "4")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassRepositoryError {
    #[error("class not found")]
    ClassNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn create_class(&self, name: String) -> Result<ClassRecord, ClassRepositoryError>;

    async fn delete_class(&self, class_id: i32) -> Result<(), ClassRepositoryError>;
}
