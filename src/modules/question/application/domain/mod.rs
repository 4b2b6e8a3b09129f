pub mod entities;

pub use entities::{AnswerCode, QuestionType, UnknownVariant};
