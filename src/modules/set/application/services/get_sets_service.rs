use async_trait::async_trait;

use crate::set::application::ports::{
    incoming::use_cases::{GetSetsError, GetSetsUseCase},
    outgoing::{SetListFilter, SetQuery, SetView},
};

#[derive(Debug, Clone)]
pub struct GetSetsService<Q>
where
    Q: SetQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSetsService<Q>
where
    Q: SetQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSetsUseCase for GetSetsService<Q>
where
    Q: SetQuery + Send + Sync,
{
    async fn execute(&self, filter: SetListFilter) -> Result<Vec<SetView>, GetSetsError> {
        self.query
            .list_sets(&filter)
            .await
            .map_err(|e| GetSetsError::QueryError(e.to_string()))
    }
}
