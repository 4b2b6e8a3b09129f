use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::question::application::domain::QuestionType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestionData {
    pub number: i32,
    pub question_type: QuestionType,
    pub content: String,
    pub is_quiz: bool,
    pub set_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuestionRecord {
    pub id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(example = "C1")]
    pub question_type: String,
    #[schema(example = "Berapakah hasil dari 7 x 8?")]
    pub content: String,
    pub is_quiz: bool,
    pub set_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionRepositoryError {
    #[error("question not found")]
    QuestionNotFound,

    /// Unique (set_id, number) constraint fired
    #[error("question number already exists in this set")]
    DuplicateNumber,

    #[error("set does not exist")]
    SetMissing,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Whether `number` is used in `set_id` by any question other than `exclude_id`.
    async fn number_taken(
        &self,
        set_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, QuestionRepositoryError>;

    async fn create_question(
        &self,
        data: NewQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError>;

    async fn update_question(
        &self,
        question_id: i32,
        data: NewQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError>;

    async fn delete_question(&self, question_id: i32) -> Result<(), QuestionRepositoryError>;
}
