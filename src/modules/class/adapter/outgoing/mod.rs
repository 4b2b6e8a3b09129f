mod class_query_postgres;
mod class_repository_postgres;
pub mod sea_orm_entity;

pub use class_query_postgres::ClassQueryPostgres;
pub use class_repository_postgres::ClassRepositoryPostgres;
