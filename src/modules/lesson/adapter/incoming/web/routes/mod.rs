mod add_lesson;
mod delete_lesson;
mod get_lessons;

pub use add_lesson::*;
pub use delete_lesson::*;
pub use get_lessons::*;
