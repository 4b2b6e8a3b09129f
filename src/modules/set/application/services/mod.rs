mod add_set_service;
mod delete_set_service;
mod get_sets_service;

pub use add_set_service::AddSetService;
pub use delete_set_service::DeleteSetService;
pub use get_sets_service::GetSetsService;
