mod lesson_query_postgres;
mod lesson_repository_postgres;
pub mod sea_orm_entity;

pub use lesson_query_postgres::LessonQueryPostgres;
pub use lesson_repository_postgres::LessonRepositoryPostgres;
