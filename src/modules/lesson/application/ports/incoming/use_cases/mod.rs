mod add_lesson;
mod delete_lesson;
mod get_lessons;

pub use add_lesson::{AddLessonCommand, AddLessonCommandError, AddLessonError, AddLessonUseCase};
pub use delete_lesson::{DeleteLessonError, DeleteLessonUseCase};
pub use get_lessons::{GetLessonsError, GetLessonsUseCase};
