use async_trait::async_trait;

use crate::question::application::domain::AnswerCode;
use crate::question::application::ports::outgoing::{AnswerRecord, NewAnswerData};

//
// ──────────────────────────────────────────────────────────
// Answer Command
// ──────────────────────────────────────────────────────────
//

/// Validated answer body, shared by add and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCommand {
    question_id: i32,
    code: AnswerCode,
    content: String,
    img_url: Option<String>,
    is_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerCommandError {
    #[error("question_id must be a positive id")]
    InvalidQuestionId,

    #[error("code must be one of a b c d esay")]
    InvalidCode,

    #[error("content cannot be empty")]
    EmptyContent,
}

impl AnswerCommand {
    pub fn new(
        question_id: i32,
        code: &str,
        content: String,
        img_url: Option<String>,
        is_answer: bool,
    ) -> Result<Self, AnswerCommandError> {
        if question_id < 1 {
            return Err(AnswerCommandError::InvalidQuestionId);
        }
        let code = code
            .parse::<AnswerCode>()
            .map_err(|_| AnswerCommandError::InvalidCode)?;
        if content.trim().is_empty() {
            return Err(AnswerCommandError::EmptyContent);
        }
        // An empty picture URL means no picture
        let img_url = img_url.filter(|url| !url.trim().is_empty());

        Ok(Self {
            question_id,
            code,
            content,
            img_url,
            is_answer,
        })
    }

    pub fn question_id(&self) -> i32 {
        self.question_id
    }

    pub fn code(&self) -> AnswerCode {
        self.code
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn img_url(&self) -> Option<&str> {
        self.img_url.as_deref()
    }

    pub fn is_answer(&self) -> bool {
        self.is_answer
    }

    pub fn into_data(self) -> NewAnswerData {
        NewAnswerData {
            question_id: self.question_id,
            code: self.code,
            content: self.content,
            img_url: self.img_url,
            is_answer: self.is_answer,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddAnswerError {
    #[error("question does not exist")]
    QuestionMissing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddAnswerUseCase: Send + Sync {
    async fn execute(&self, command: AnswerCommand) -> Result<AnswerRecord, AddAnswerError>;
}
