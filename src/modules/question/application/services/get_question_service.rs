use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{GetQuestionError, GetQuestionUseCase},
    outgoing::{QuestionDetail, QuestionQuery},
};

#[derive(Debug, Clone)]
pub struct GetQuestionService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetQuestionService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetQuestionUseCase for GetQuestionService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    async fn execute(&self, question_id: i32) -> Result<QuestionDetail, GetQuestionError> {
        self.query
            .find_question(question_id)
            .await
            .map_err(|e| GetQuestionError::QueryError(e.to_string()))?
            .ok_or(GetQuestionError::QuestionNotFound)
    }
}
