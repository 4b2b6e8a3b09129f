use async_trait::async_trait;
use tracing::warn;

use crate::question::application::ports::{
    incoming::use_cases::{AddQuestionError, AddQuestionUseCase, QuestionCommand},
    outgoing::{QuestionRecord, QuestionRepository, QuestionRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AddQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(err: QuestionRepositoryError) -> AddQuestionError {
    match err {
        QuestionRepositoryError::DuplicateNumber => AddQuestionError::NumberTaken,
        QuestionRepositoryError::SetMissing => AddQuestionError::SetMissing,
        other => AddQuestionError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> AddQuestionUseCase for AddQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    async fn execute(&self, command: QuestionCommand) -> Result<QuestionRecord, AddQuestionError> {
        let taken = self
            .repository
            .number_taken(command.set_id(), command.number(), None)
            .await
            .map_err(map_repository_error)?;

        if taken {
            warn!(
                set_id = command.set_id(),
                number = command.number(),
                "Question number already used in set"
            );
            return Err(AddQuestionError::NumberTaken);
        }

        // The unique index still rejects a concurrent insert of the same number
        self.repository
            .create_question(command.into_data())
            .await
            .map_err(map_repository_error)
    }
}
