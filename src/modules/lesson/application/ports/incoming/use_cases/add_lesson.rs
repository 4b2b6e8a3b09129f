use async_trait::async_trait;

use crate::lesson::application::{domain::lesson_name_in_range, ports::outgoing::LessonRecord};

//
// ──────────────────────────────────────────────────────────
// Add Lesson Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddLessonCommand {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddLessonCommandError {
    #[error("lesson name must be 2-20 characters")]
    InvalidName,
}

impl AddLessonCommand {
    pub fn new(name: String) -> Result<Self, AddLessonCommandError> {
        let name = name.trim();
        if !lesson_name_in_range(name) {
            return Err(AddLessonCommandError::InvalidName);
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddLessonError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddLessonUseCase: Send + Sync {
    async fn execute(&self, command: AddLessonCommand) -> Result<LessonRecord, AddLessonError>;
}
