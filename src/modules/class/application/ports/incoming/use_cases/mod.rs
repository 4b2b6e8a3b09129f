mod add_class;
mod delete_class;
mod get_classes;

pub use add_class::{AddClassCommand, AddClassCommandError, AddClassError, AddClassUseCase};
pub use delete_class::{DeleteClassError, DeleteClassUseCase};
pub use get_classes::{GetClassesError, GetClassesUseCase};
