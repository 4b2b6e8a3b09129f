mod lesson_query;
mod lesson_repository;

pub use lesson_query::{LessonQuery, LessonQueryError};
pub use lesson_repository::{LessonRecord, LessonRepository, LessonRepositoryError};
