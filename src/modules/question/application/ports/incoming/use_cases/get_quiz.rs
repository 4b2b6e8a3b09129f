use async_trait::async_trait;

use crate::question::application::ports::outgoing::{QuizFilter, QuizQuestion};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetQuizError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetQuizUseCase: Send + Sync {
    async fn execute(&self, filter: QuizFilter) -> Result<Vec<QuizQuestion>, GetQuizError>;
}
