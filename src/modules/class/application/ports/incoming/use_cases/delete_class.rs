use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteClassError {
    #[error("class not found")]
    ClassNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteClassUseCase: Send + Sync {
    async fn execute(&self, class_id: i32) -> Result<(), DeleteClassError>;
}
