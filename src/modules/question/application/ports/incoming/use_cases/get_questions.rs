use async_trait::async_trait;

use crate::question::application::ports::outgoing::{QuestionDetail, QuestionListFilter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetQuestionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetQuestionsUseCase: Send + Sync {
    async fn execute(&self, filter: QuestionListFilter) -> Result<Vec<QuestionDetail>, GetQuestionsError>;
}
