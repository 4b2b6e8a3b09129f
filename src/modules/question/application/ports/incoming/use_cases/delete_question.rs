use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteQuestionError {
    #[error("question not found")]
    QuestionNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteQuestionUseCase: Send + Sync {
    async fn execute(&self, question_id: i32) -> Result<(), DeleteQuestionError>;
}
