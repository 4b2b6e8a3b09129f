use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{DeleteAnswerError, DeleteAnswerUseCase},
    outgoing::{AnswerRepository, AnswerRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAnswerUseCase for DeleteAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    async fn execute(&self, answer_id: i32) -> Result<(), DeleteAnswerError> {
        self.repository
            .delete_answer(answer_id)
            .await
            .map_err(|e| match e {
                AnswerRepositoryError::AnswerNotFound => DeleteAnswerError::AnswerNotFound,
                other => DeleteAnswerError::RepositoryError(other.to_string()),
            })
    }
}
