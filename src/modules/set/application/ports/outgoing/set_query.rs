use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

/// Every present field narrows the result; names match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetListFilter {
    pub lesson: Option<String>,
    pub class: Option<String>,
    pub is_quiz: Option<bool>,
}

/// Set joined with its lesson and class names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SetView {
    pub id: i32,
    #[schema(example = "Latihan 1")]
    pub name: String,
    #[schema(example = "Matematika")]
    pub lesson: String,
    #[schema(example = "4")]
    pub class: String,
    pub is_quiz: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SetQuery: Send + Sync {
    async fn list_sets(&self, filter: &SetListFilter) -> Result<Vec<SetView>, SetQueryError>;
}
