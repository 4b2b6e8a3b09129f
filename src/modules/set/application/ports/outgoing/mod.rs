mod set_query;
mod set_repository;

pub use set_query::{SetListFilter, SetQuery, SetQueryError, SetView};
pub use set_repository::{NewSetData, SetRecord, SetRepository, SetRepositoryError};
