use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{EditQuestionError, EditQuestionUseCase, QuestionCommand},
    outgoing::{QuestionRecord, QuestionRepository, QuestionRepositoryError},
};

#[derive(Debug, Clone)]
pub struct EditQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    repository: R,
}

impl<R> EditQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(err: QuestionRepositoryError) -> EditQuestionError {
    match err {
        QuestionRepositoryError::QuestionNotFound => EditQuestionError::QuestionNotFound,
        QuestionRepositoryError::DuplicateNumber => EditQuestionError::NumberTaken,
        QuestionRepositoryError::SetMissing => EditQuestionError::SetMissing,
        QuestionRepositoryError::DatabaseError(msg) => EditQuestionError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R> EditQuestionUseCase for EditQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    async fn execute(
        &self,
        question_id: i32,
        command: QuestionCommand,
    ) -> Result<QuestionRecord, EditQuestionError> {
        // Keeping its own number is not a conflict
        let taken = self
            .repository
            .number_taken(command.set_id(), command.number(), Some(question_id))
            .await
            .map_err(map_repository_error)?;

        if taken {
            return Err(EditQuestionError::NumberTaken);
        }

        self.repository
            .update_question(question_id, command.into_data())
            .await
            .map_err(map_repository_error)
    }
}
