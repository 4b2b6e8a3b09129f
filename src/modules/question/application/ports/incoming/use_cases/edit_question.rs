use async_trait::async_trait;

use super::add_question::QuestionCommand;
use crate::question::application::ports::outgoing::QuestionRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditQuestionError {
    #[error("question not found")]
    QuestionNotFound,

    #[error("question number already exists in this set")]
    NumberTaken,

    #[error("set does not exist")]
    SetMissing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Full replacement of every question field.
#[async_trait]
pub trait EditQuestionUseCase: Send + Sync {
    async fn execute(
        &self,
        question_id: i32,
        command: QuestionCommand,
    ) -> Result<QuestionRecord, EditQuestionError>;
}
