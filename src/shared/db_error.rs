// src/shared/db_error.rs
use sea_orm::DbErr;

/// Postgres error classes repositories translate into typed failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbFailure {
    UniqueViolation,
    ForeignKeyViolation,
    Other(String),
}

pub fn classify(err: &DbErr) -> DbFailure {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("23505")
        || lowered.contains("duplicate key")
        || lowered.contains("unique constraint")
    {
        DbFailure::UniqueViolation
    } else if lowered.contains("23503") || lowered.contains("foreign key constraint") {
        DbFailure::ForeignKeyViolation
    } else {
        DbFailure::Other(message)
    }
}
