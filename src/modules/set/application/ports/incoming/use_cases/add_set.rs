use async_trait::async_trait;

use crate::set::application::ports::outgoing::SetRecord;

//
// ──────────────────────────────────────────────────────────
// Add Set Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddSetCommand {
    name: String,
    lesson_id: i32,
    class_id: i32,
    is_quiz: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddSetCommandError {
    #[error("set name must be 2-20 characters")]
    InvalidName,

    #[error("lesson_id must be a positive id")]
    InvalidLessonId,

    #[error("class_id must be a positive id")]
    InvalidClassId,
}

impl AddSetCommand {
    pub fn new(
        name: String,
        lesson_id: i32,
        class_id: i32,
        is_quiz: bool,
    ) -> Result<Self, AddSetCommandError> {
        let name = name.trim();
        let len = name.chars().count();
        if !(2..=20).contains(&len) {
            return Err(AddSetCommandError::InvalidName);
        }
        if lesson_id < 1 {
            return Err(AddSetCommandError::InvalidLessonId);
        }
        if class_id < 1 {
            return Err(AddSetCommandError::InvalidClassId);
        }

        Ok(Self {
            name: name.to_string(),
            lesson_id,
            class_id,
            is_quiz,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lesson_id(&self) -> i32 {
        self.lesson_id
    }

    pub fn class_id(&self) -> i32 {
        self.class_id
    }

    pub fn is_quiz(&self) -> bool {
        self.is_quiz
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddSetError {
    #[error("lesson or class does not exist")]
    LessonOrClassMissing,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddSetUseCase: Send + Sync {
    async fn execute(&self, command: AddSetCommand) -> Result<SetRecord, AddSetError>;
}
