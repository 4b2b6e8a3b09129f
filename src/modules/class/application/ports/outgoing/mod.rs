mod class_query;
mod class_repository;

pub use class_query::{ClassQuery, ClassQueryError};
pub use class_repository::{ClassRecord, ClassRepository, ClassRepositoryError};
