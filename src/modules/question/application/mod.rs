pub mod domain;
pub mod ports;
pub mod services;
mod question_use_cases;

pub use question_use_cases::QuestionUseCases;
