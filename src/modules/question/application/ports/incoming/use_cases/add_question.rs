use async_trait::async_trait;

use crate::question::application::domain::QuestionType;
use crate::question::application::ports::outgoing::{NewQuestionData, QuestionRecord};

//
// ──────────────────────────────────────────────────────────
// Question Command
// ──────────────────────────────────────────────────────────
//

/// Validated question body, shared by add and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCommand {
    number: i32,
    question_type: QuestionType,
    content: String,
    is_quiz: bool,
    set_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionCommandError {
    #[error("number must be at least 1")]
    InvalidNumber,

    #[error("type must be one of C1 C2 C3 C4 C5 C6")]
    InvalidType,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("set_id must be a positive id")]
    InvalidSetId,
}

impl QuestionCommand {
    pub fn new(
        number: i32,
        question_type: &str,
        content: String,
        is_quiz: bool,
        set_id: i32,
    ) -> Result<Self, QuestionCommandError> {
        if number < 1 {
            return Err(QuestionCommandError::InvalidNumber);
        }
        let question_type = question_type
            .parse::<QuestionType>()
            .map_err(|_| QuestionCommandError::InvalidType)?;
        if content.trim().is_empty() {
            return Err(QuestionCommandError::EmptyContent);
        }
        if set_id < 1 {
            return Err(QuestionCommandError::InvalidSetId);
        }

        Ok(Self {
            number,
            question_type,
            content,
            is_quiz,
            set_id,
        })
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_quiz(&self) -> bool {
        self.is_quiz
    }

    pub fn set_id(&self) -> i32 {
        self.set_id
    }

    pub fn into_data(self) -> NewQuestionData {
        NewQuestionData {
            number: self.number,
            question_type: self.question_type,
            content: self.content,
            is_quiz: self.is_quiz,
            set_id: self.set_id,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddQuestionError {
    #[error("question number already exists in this set")]
    NumberTaken,

    #[error("set does not exist")]
    SetMissing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddQuestionUseCase: Send + Sync {
    async fn execute(&self, command: QuestionCommand) -> Result<QuestionRecord, AddQuestionError>;
}
