use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{UserListFilter, UserSummary};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, GetUsersError>;
}
