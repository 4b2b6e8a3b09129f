use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{GetAdminQuestionsError, GetAdminQuestionsUseCase},
    outgoing::{AdminQuestionFilter, AdminQuestionView, QuestionQuery},
};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone)]
pub struct GetAdminQuestionsService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAdminQuestionsService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAdminQuestionsUseCase for GetAdminQuestionsService<Q>
where
    Q: QuestionQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: AdminQuestionFilter,
        page: PageRequest,
    ) -> Result<Vec<AdminQuestionView>, GetAdminQuestionsError> {
        self.query
            .list_admin_questions(&filter, page)
            .await
            .map_err(|e| GetAdminQuestionsError::QueryError(e.to_string()))
    }
}
