use std::sync::Arc;

use crate::question::application::ports::incoming::use_cases::{
    AddAnswerUseCase, AddQuestionUseCase, DeleteAnswerUseCase, DeleteQuestionUseCase,
    EditAnswerUseCase, EditQuestionUseCase, GetAdminQuestionsUseCase, GetQuestionUseCase,
    GetQuestionsUseCase, GetQuizUseCase,
};

#[derive(Clone)]
pub struct QuestionUseCases {
    pub add: Arc<dyn AddQuestionUseCase + Send + Sync>,
    pub edit: Arc<dyn EditQuestionUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetQuestionUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetQuestionsUseCase + Send + Sync>,
    pub get_quiz: Arc<dyn GetQuizUseCase + Send + Sync>,
    pub get_admin_list: Arc<dyn GetAdminQuestionsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteQuestionUseCase + Send + Sync>,
    pub add_answer: Arc<dyn AddAnswerUseCase + Send + Sync>,
    pub edit_answer: Arc<dyn EditAnswerUseCase + Send + Sync>,
    pub delete_answer: Arc<dyn DeleteAnswerUseCase + Send + Sync>,
}
