use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::question::application::domain::QuestionType;
use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Filters
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionListFilter {
    pub set_id: Option<i32>,
}

/// Narrows the quiz listing. Only questions flagged `is_quiz` are ever returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    pub set_id: Option<i32>,
    pub question_type: Option<QuestionType>,
    pub number: Option<i32>,
}

/// Names match exactly against the joined set, lesson and class rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminQuestionFilter {
    pub is_quiz: Option<bool>,
    pub lesson: Option<String>,
    pub class: Option<String>,
    pub set: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Read models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuestionDetail {
    pub id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(example = "C1")]
    pub question_type: String,
    pub content: String,
    pub set_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuizAnswer {
    pub id: i32,
    #[schema(example = "a")]
    pub code: String,
    pub content: String,
    pub img_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuizQuestion {
    pub id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(example = "C1")]
    pub question_type: String,
    pub content: String,
    pub set_id: i32,
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminQuestionView {
    pub id: i32,
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(example = "C1")]
    pub question_type: String,
    pub content: String,
    pub is_quiz: bool,
    pub set_id: i32,
    #[schema(example = "Latihan 1")]
    pub set_name: String,
    #[schema(example = "Matematika")]
    pub lesson_name: String,
    #[schema(example = "4")]
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait QuestionQuery: Send + Sync {
    async fn find_question(&self, question_id: i32) -> Result<Option<QuestionDetail>, QuestionQueryError>;

    async fn list_questions(
        &self,
        filter: &QuestionListFilter,
    ) -> Result<Vec<QuestionDetail>, QuestionQueryError>;

    async fn list_quiz_questions(
        &self,
        filter: &QuizFilter,
    ) -> Result<Vec<QuizQuestion>, QuestionQueryError>;

    async fn list_admin_questions(
        &self,
        filter: &AdminQuestionFilter,
        page: PageRequest,
    ) -> Result<Vec<AdminQuestionView>, QuestionQueryError>;
}
