use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{AnswerCommand, EditAnswerError, EditAnswerUseCase},
    outgoing::{AnswerRecord, AnswerRepository, AnswerRepositoryError},
};

#[derive(Debug, Clone)]
pub struct EditAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    repository: R,
}

impl<R> EditAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EditAnswerUseCase for EditAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    async fn execute(
        &self,
        answer_id: i32,
        command: AnswerCommand,
    ) -> Result<AnswerRecord, EditAnswerError> {
        self.repository
            .update_answer(answer_id, command.into_data())
            .await
            .map_err(|e| match e {
                AnswerRepositoryError::AnswerNotFound => EditAnswerError::AnswerNotFound,
                AnswerRepositoryError::QuestionMissing => EditAnswerError::QuestionMissing,
                AnswerRepositoryError::DatabaseError(msg) => EditAnswerError::RepositoryError(msg),
            })
    }
}
