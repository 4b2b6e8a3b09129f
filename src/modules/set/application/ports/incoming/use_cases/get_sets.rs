use async_trait::async_trait;

use crate::set::application::ports::outgoing::{SetListFilter, SetView};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSetsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetSetsUseCase: Send + Sync {
    async fn execute(&self, filter: SetListFilter) -> Result<Vec<SetView>, GetSetsError>;
}
