pub mod entities;

pub use entities::{lesson_name_in_range, LESSON_NAME_MAX, LESSON_NAME_MIN};
