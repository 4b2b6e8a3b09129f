use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{DeleteQuestionError, DeleteQuestionUseCase},
    outgoing::{QuestionRepository, QuestionRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteQuestionUseCase for DeleteQuestionService<R>
where
    R: QuestionRepository + Send + Sync,
{
    async fn execute(&self, question_id: i32) -> Result<(), DeleteQuestionError> {
        self.repository
            .delete_question(question_id)
            .await
            .map_err(|e| match e {
                QuestionRepositoryError::QuestionNotFound => DeleteQuestionError::QuestionNotFound,
                other => DeleteQuestionError::RepositoryError(other.to_string()),
            })
    }
}
