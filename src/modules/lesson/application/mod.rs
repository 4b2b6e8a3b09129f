mod lesson_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use lesson_use_cases::LessonUseCases;
