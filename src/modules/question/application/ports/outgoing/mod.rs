mod answer_repository;
mod question_query;
mod question_repository;

pub use answer_repository::{AnswerRecord, AnswerRepository, AnswerRepositoryError, NewAnswerData};
pub use question_query::{
    AdminQuestionFilter, AdminQuestionView, QuestionDetail, QuestionListFilter, QuestionQuery,
    QuestionQueryError, QuizAnswer, QuizFilter, QuizQuestion,
};
pub use question_repository::{
    NewQuestionData, QuestionRecord, QuestionRepository, QuestionRepositoryError,
};
