mod add_set;
mod delete_set;
mod get_sets;

pub use add_set::{AddSetCommand, AddSetCommandError, AddSetError, AddSetUseCase};
pub use delete_set::{DeleteSetError, DeleteSetUseCase};
pub use get_sets::{GetSetsError, GetSetsUseCase};
