use async_trait::async_trait;

use crate::question::application::ports::outgoing::{AdminQuestionFilter, AdminQuestionView};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetAdminQuestionsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetAdminQuestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: AdminQuestionFilter,
        page: PageRequest,
    ) -> Result<Vec<AdminQuestionView>, GetAdminQuestionsError>;
}
