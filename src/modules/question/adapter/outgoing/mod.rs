mod answer_repository_postgres;
mod question_query_postgres;
mod question_repository_postgres;
pub mod sea_orm_entity;

pub use answer_repository_postgres::AnswerRepositoryPostgres;
pub use question_query_postgres::QuestionQueryPostgres;
pub use question_repository_postgres::QuestionRepositoryPostgres;
