mod add_lesson_service;
mod delete_lesson_service;
mod get_lessons_service;

pub use add_lesson_service::AddLessonService;
pub use delete_lesson_service::DeleteLessonService;
pub use get_lessons_service::GetLessonsService;
