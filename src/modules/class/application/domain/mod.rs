pub mod entities;

pub use entities::{is_valid_class_name, CLASS_NAMES};
