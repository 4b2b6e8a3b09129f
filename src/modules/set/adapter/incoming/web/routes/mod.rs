mod add_set;
mod delete_set;
mod get_sets;

pub use add_set::*;
pub use delete_set::*;
pub use get_sets::*;
