use async_trait::async_trait;

use crate::lesson::application::ports::{
    incoming::use_cases::{GetLessonsError, GetLessonsUseCase},
    outgoing::{LessonQuery, LessonRecord},
};

#[derive(Debug, Clone)]
pub struct GetLessonsService<Q>
where
    Q: LessonQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetLessonsService<Q>
where
    Q: LessonQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetLessonsUseCase for GetLessonsService<Q>
where
    Q: LessonQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<LessonRecord>, GetLessonsError> {
        self.query
            .list_lessons()
            .await
            .map_err(|e| GetLessonsError::QueryError(e.to_string()))
    }
}
