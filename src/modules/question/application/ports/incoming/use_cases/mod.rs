mod add_answer;
mod add_question;
mod delete_answer;
mod delete_question;
mod edit_answer;
mod edit_question;
mod get_admin_questions;
mod get_question;
mod get_questions;
mod get_quiz;

pub use add_answer::{AddAnswerError, AddAnswerUseCase, AnswerCommand, AnswerCommandError};
pub use add_question::{
    AddQuestionError, AddQuestionUseCase, QuestionCommand, QuestionCommandError,
};
pub use delete_answer::{DeleteAnswerError, DeleteAnswerUseCase};
pub use delete_question::{DeleteQuestionError, DeleteQuestionUseCase};
pub use edit_answer::{EditAnswerError, EditAnswerUseCase};
pub use edit_question::{EditQuestionError, EditQuestionUseCase};
pub use get_admin_questions::{GetAdminQuestionsError, GetAdminQuestionsUseCase};
pub use get_question::{GetQuestionError, GetQuestionUseCase};
pub use get_questions::{GetQuestionsError, GetQuestionsUseCase};
pub use get_quiz::{GetQuizError, GetQuizUseCase};
