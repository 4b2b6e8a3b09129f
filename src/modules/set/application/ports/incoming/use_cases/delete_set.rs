use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteSetError {
    #[error("set not found")]
    SetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSetUseCase: Send + Sync {
    async fn execute(&self, set_id: i32) -> Result<(), DeleteSetError>;
}
