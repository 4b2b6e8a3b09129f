use async_trait::async_trait;

use super::ClassRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ClassQuery: Send + Sync {
    /// All classes ordered by id
    async fn list_classes(&self) -> Result<Vec<ClassRecord>, ClassQueryError>;
}
