use async_trait::async_trait;

use crate::class::application::{domain::is_valid_class_name, ports::outgoing::ClassRecord};

//
// ──────────────────────────────────────────────────────────
// Add Class Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddClassCommand {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddClassCommandError {
    #[error("class name must be one of 1, 2, 3, 4, 5, 6")]
    InvalidName,
}

impl AddClassCommand {
    pub fn new(name: String) -> Result<Self, AddClassCommandError> {
        let name = name.trim();
        if !is_valid_class_name(name) {
            return Err(AddClassCommandError::InvalidName);
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
pub enum AddClassError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddClassUseCase: Send + Sync {
    async fn execute(&self, command: AddClassCommand) -> Result<ClassRecord, AddClassError>;
}
