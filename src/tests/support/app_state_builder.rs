use actix_web::web;
use std::sync::Arc;

use crate::activation::application::ports::incoming::use_cases::{CheckOtpUseCase, SendOtpUseCase};
use crate::activation::application::ActivationUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetProfileUseCase, GetUserUseCase, GetUsersUseCase, LoginUserUseCase,
    RegisterAdminUseCase, RegisterUserUseCase, UpdateUserUseCase,
};
use crate::auth::application::UserUseCases;
use crate::class::application::ports::incoming::use_cases::{
    AddClassUseCase, DeleteClassUseCase, GetClassesUseCase,
};
use crate::class::application::ClassUseCases;
use crate::lesson::application::ports::incoming::use_cases::{
    AddLessonUseCase, DeleteLessonUseCase, GetLessonsUseCase,
};
use crate::lesson::application::LessonUseCases;
use crate::question::application::ports::incoming::use_cases::{
    AddAnswerUseCase, AddQuestionUseCase, DeleteAnswerUseCase, DeleteQuestionUseCase,
    EditAnswerUseCase, EditQuestionUseCase, GetAdminQuestionsUseCase, GetQuestionUseCase,
    GetQuestionsUseCase, GetQuizUseCase,
};
use crate::question::application::QuestionUseCases;
use crate::set::application::ports::incoming::use_cases::{
    AddSetUseCase, DeleteSetUseCase, GetSetsUseCase,
};
use crate::set::application::SetUseCases;
use crate::tests::support::stubs::StubUseCase;
use crate::AppState;

/// Every use case starts as a panicking stub; tests swap in the ones they
/// exercise.
pub struct TestAppStateBuilder {
    class: ClassUseCases,
    lesson: LessonUseCases,
    set: SetUseCases,
    question: QuestionUseCases,
    user: UserUseCases,
    activation: ActivationUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(StubUseCase);
        Self {
            class: ClassUseCases {
                add: stub.clone(),
                delete: stub.clone(),
                get_list: stub.clone(),
            },
            lesson: LessonUseCases {
                add: stub.clone(),
                delete: stub.clone(),
                get_list: stub.clone(),
            },
            set: SetUseCases {
                add: stub.clone(),
                delete: stub.clone(),
                get_list: stub.clone(),
            },
            question: QuestionUseCases {
                add: stub.clone(),
                edit: stub.clone(),
                get_single: stub.clone(),
                get_list: stub.clone(),
                get_quiz: stub.clone(),
                get_admin_list: stub.clone(),
                delete: stub.clone(),
                add_answer: stub.clone(),
                edit_answer: stub.clone(),
                delete_answer: stub.clone(),
            },
            user: UserUseCases {
                register: stub.clone(),
                register_admin: stub.clone(),
                login: stub.clone(),
                get_list: stub.clone(),
                get_single: stub.clone(),
                get_profile: stub.clone(),
                update: stub.clone(),
                delete: stub.clone(),
            },
            activation: ActivationUseCases {
                send_otp: stub.clone(),
                check_otp: stub.clone(),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_add_class(mut self, uc: impl AddClassUseCase + 'static) -> Self {
        self.class.add = Arc::new(uc);
        self
    }

    pub fn with_delete_class(mut self, uc: impl DeleteClassUseCase + 'static) -> Self {
        self.class.delete = Arc::new(uc);
        self
    }

    pub fn with_get_classes(mut self, uc: impl GetClassesUseCase + 'static) -> Self {
        self.class.get_list = Arc::new(uc);
        self
    }

    pub fn with_add_lesson(mut self, uc: impl AddLessonUseCase + 'static) -> Self {
        self.lesson.add = Arc::new(uc);
        self
    }

    pub fn with_delete_lesson(mut self, uc: impl DeleteLessonUseCase + 'static) -> Self {
        self.lesson.delete = Arc::new(uc);
        self
    }

    pub fn with_get_lessons(mut self, uc: impl GetLessonsUseCase + 'static) -> Self {
        self.lesson.get_list = Arc::new(uc);
        self
    }

    pub fn with_add_set(mut self, uc: impl AddSetUseCase + 'static) -> Self {
        self.set.add = Arc::new(uc);
        self
    }

    pub fn with_delete_set(mut self, uc: impl DeleteSetUseCase + 'static) -> Self {
        self.set.delete = Arc::new(uc);
        self
    }

    pub fn with_get_sets(mut self, uc: impl GetSetsUseCase + 'static) -> Self {
        self.set.get_list = Arc::new(uc);
        self
    }

    pub fn with_add_question(mut self, uc: impl AddQuestionUseCase + 'static) -> Self {
        self.question.add = Arc::new(uc);
        self
    }

    pub fn with_edit_question(mut self, uc: impl EditQuestionUseCase + 'static) -> Self {
        self.question.edit = Arc::new(uc);
        self
    }

    pub fn with_get_question(mut self, uc: impl GetQuestionUseCase + 'static) -> Self {
        self.question.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_questions(mut self, uc: impl GetQuestionsUseCase + 'static) -> Self {
        self.question.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_quiz(mut self, uc: impl GetQuizUseCase + 'static) -> Self {
        self.question.get_quiz = Arc::new(uc);
        self
    }

    pub fn with_get_admin_questions(mut self, uc: impl GetAdminQuestionsUseCase + 'static) -> Self {
        self.question.get_admin_list = Arc::new(uc);
        self
    }

    pub fn with_delete_question(mut self, uc: impl DeleteQuestionUseCase + 'static) -> Self {
        self.question.delete = Arc::new(uc);
        self
    }

    pub fn with_add_answer(mut self, uc: impl AddAnswerUseCase + 'static) -> Self {
        self.question.add_answer = Arc::new(uc);
        self
    }

    pub fn with_edit_answer(mut self, uc: impl EditAnswerUseCase + 'static) -> Self {
        self.question.edit_answer = Arc::new(uc);
        self
    }

    pub fn with_delete_answer(mut self, uc: impl DeleteAnswerUseCase + 'static) -> Self {
        self.question.delete_answer = Arc::new(uc);
        self
    }

    pub fn with_register_user(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.user.register = Arc::new(uc);
        self
    }

    pub fn with_register_admin(mut self, uc: impl RegisterAdminUseCase + 'static) -> Self {
        self.user.register_admin = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.user.login = Arc::new(uc);
        self
    }

    pub fn with_get_users(mut self, uc: impl GetUsersUseCase + 'static) -> Self {
        self.user.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + 'static) -> Self {
        self.user.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.user.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    pub fn with_send_otp(mut self, uc: impl SendOtpUseCase + 'static) -> Self {
        self.activation.send_otp = Arc::new(uc);
        self
    }

    pub fn with_check_otp(mut self, uc: impl CheckOtpUseCase + 'static) -> Self {
        self.activation.check_otp = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            class: self.class,
            lesson: self.lesson,
            set: self.set,
            question: self.question,
            user: self.user,
            activation: self.activation,
        })
    }
}
