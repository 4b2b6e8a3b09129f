use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{GetQuestionsError, GetQuestionsUseCase},
    outgoing::{QuestionDetail, QuestionListFilter, QuestionQuery},
};

#[derive(Debug, Clone)]
pub struct GetQuestionsService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetQuestionsService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetQuestionsUseCase for GetQuestionsService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    async fn execute(&self, filter: QuestionListFilter) -> Result<Vec<QuestionDetail>, GetQuestionsError> {
        self.query
            .list_questions(&filter)
            .await
            .map_err(|e| GetQuestionsError::QueryError(e.to_string()))
    }
}
