use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{GetUsersError, GetUsersUseCase},
    outgoing::{UserListFilter, UserQuery, UserSummary},
};
use crate::shared::pagination::PageRequest;

#[derive(Debug, Clone)]
pub struct GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUsersUseCase for GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, GetUsersError> {
        self.query
            .list_users(&filter, page)
            .await
            .map_err(|e| GetUsersError::QueryError(e.to_string()))
    }
}
