mod add_class;
mod delete_class;
mod get_classes;

pub use add_class::*;
pub use delete_class::*;
pub use get_classes::*;
