use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{GetQuizError, GetQuizUseCase},
    outgoing::{QuestionQuery, QuizFilter, QuizQuestion},
};

#[derive(Debug, Clone)]
pub struct GetQuizService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetQuizService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetQuizUseCase for GetQuizService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    async fn execute(&self, filter: QuizFilter) -> Result<Vec<QuizQuestion>, GetQuizError> {
        self.query
            .list_quiz_questions(&filter)
            .await
            .map_err(|e| GetQuizError::QueryError(e.to_string()))
    }
}
