use async_trait::async_trait;

use super::add_answer::AnswerCommand;
use crate::question::application::ports::outgoing::AnswerRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditAnswerError {
    #[error("answer not found")]
    AnswerNotFound,

    #[error("question does not exist")]
    QuestionMissing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditAnswerUseCase: Send + Sync {
    async fn execute(
        &self,
        answer_id: i32,
        command: AnswerCommand,
    ) -> Result<AnswerRecord, EditAnswerError>;
}
