use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::question::application::domain::AnswerCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswerData {
    pub question_id: i32,
    pub code: AnswerCode,
    pub content: String,
    pub img_url: Option<String>,
    pub is_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnswerRecord {
    pub id: i32,
    pub question_id: i32,
    #[schema(example = "a")]
    pub code: String,
    #[schema(example = "56")]
    pub content: String,
    pub img_url: Option<String>,
    pub is_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerRepositoryError {
    #[error("answer not found")]
    AnswerNotFound,

    #[error("question does not exist")]
    QuestionMissing,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn create_answer(&self, data: NewAnswerData) -> Result<AnswerRecord, AnswerRepositoryError>;

    async fn update_answer(
        &self,
        answer_id: i32,
        data: NewAnswerData,
    ) -> Result<AnswerRecord, AnswerRepositoryError>;

    async fn delete_answer(&self, answer_id: i32) -> Result<(), AnswerRepositoryError>;
}
