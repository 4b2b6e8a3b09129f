use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteAnswerError {
    #[error("answer not found")]
    AnswerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAnswerUseCase: Send + Sync {
    async fn execute(&self, answer_id: i32) -> Result<(), DeleteAnswerError>;
}
