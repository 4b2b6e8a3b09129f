mod add_answer_service;
mod add_question_service;
mod delete_answer_service;
mod delete_question_service;
mod edit_answer_service;
mod edit_question_service;
mod get_admin_questions_service;
mod get_question_service;
mod get_questions_service;
mod get_quiz_service;

pub use add_answer_service::AddAnswerService;
pub use add_question_service::AddQuestionService;
pub use delete_answer_service::DeleteAnswerService;
pub use delete_question_service::DeleteQuestionService;
pub use edit_answer_service::EditAnswerService;
pub use edit_question_service::EditQuestionService;
pub use get_admin_questions_service::GetAdminQuestionsService;
pub use get_question_service::GetQuestionService;
pub use get_questions_service::GetQuestionsService;
pub use get_quiz_service::GetQuizService;
