mod add_class_service;
mod delete_class_service;
mod get_classes_service;

pub use add_class_service::AddClassService;
pub use delete_class_service::DeleteClassService;
pub use get_classes_service::GetClassesService;
