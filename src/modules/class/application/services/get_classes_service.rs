use async_trait::async_trait;

use crate::class::application::ports::{
    incoming::use_cases::{GetClassesError, GetClassesUseCase},
    outgoing::{ClassQuery, ClassRecord},
};

#[derive(Debug, Clone)]
pub struct GetClassesService<Q>
where
    Q: ClassQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetClassesService<Q>
where
    Q: ClassQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetClassesUseCase for GetClassesService<Q>
where
    Q: ClassQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ClassRecord>, GetClassesError> {
        self.query
            .list_classes()
            .await
            .map_err(|e| GetClassesError::QueryError(e.to_string()))
    }
}
