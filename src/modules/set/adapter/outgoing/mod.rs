pub mod sea_orm_entity;
mod set_query_postgres;
mod set_repository_postgres;

pub use set_query_postgres::SetQueryPostgres;
pub use set_repository_postgres::SetRepositoryPostgres;
