use async_trait::async_trait;

use crate::question::application::ports::outgoing::QuestionDetail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetQuestionError {
    #[error("question not found")]
    QuestionNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetQuestionUseCase: Send + Sync {
    async fn execute(&self, question_id: i32) -> Result<QuestionDetail, GetQuestionError>;
}
