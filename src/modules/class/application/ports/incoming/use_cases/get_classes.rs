use async_trait::async_trait;

use crate::class::application::ports::outgoing::ClassRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetClassesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetClassesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ClassRecord>, GetClassesError>;
}
