//! Placeholder use cases for the parts of `AppState` a handler test does
//! not exercise. Every call panics.

use async_trait::async_trait;

use crate::activation::application::ports::incoming::use_cases::{
    CheckOtpCommand, CheckOtpError, CheckOtpUseCase, SendOtpCommand, SendOtpError, SendOtpUseCase,
};
use crate::auth::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase, GetProfileUseCase, GetUserError, GetUserUseCase,
    GetUsersError, GetUsersUseCase, LoginResult, LoginUserCommand, LoginUserError,
    LoginUserUseCase, RegisterAdminCommand, RegisterAdminError, RegisterAdminUseCase,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, UpdateUserCommand,
    UpdateUserError, UpdateUserUseCase,
};
use crate::auth::application::ports::outgoing::{UserListFilter, UserProfile, UserSummary};
use crate::class::application::ports::incoming::use_cases::{
    AddClassCommand, AddClassError, AddClassUseCase, DeleteClassError, DeleteClassUseCase,
    GetClassesError, GetClassesUseCase,
};
use crate::class::application::ports::outgoing::ClassRecord;
use crate::lesson::application::ports::incoming::use_cases::{
    AddLessonCommand, AddLessonError, AddLessonUseCase, DeleteLessonError, DeleteLessonUseCase,
    GetLessonsError, GetLessonsUseCase,
};
use crate::lesson::application::ports::outgoing::LessonRecord;
use crate::question::application::ports::incoming::use_cases::{
    AddAnswerError, AddAnswerUseCase, AddQuestionError, AddQuestionUseCase, AnswerCommand,
    DeleteAnswerError, DeleteAnswerUseCase, DeleteQuestionError, DeleteQuestionUseCase,
    EditAnswerError, EditAnswerUseCase, EditQuestionError, EditQuestionUseCase,
    GetAdminQuestionsError, GetAdminQuestionsUseCase, GetQuestionError, GetQuestionUseCase,
    GetQuestionsError, GetQuestionsUseCase, GetQuizError, GetQuizUseCase, QuestionCommand,
};
use crate::question::application::ports::outgoing::{
    AdminQuestionFilter, AdminQuestionView, AnswerRecord, QuestionDetail, QuestionListFilter,
    QuestionRecord, QuizFilter, QuizQuestion,
};
use crate::set::application::ports::incoming::use_cases::{
    AddSetCommand, AddSetError, AddSetUseCase, DeleteSetError, DeleteSetUseCase, GetSetsError,
    GetSetsUseCase,
};
use crate::set::application::ports::outgoing::{SetListFilter, SetRecord, SetView};
use crate::shared::pagination::PageRequest;

#[derive(Default, Clone, Copy)]
pub struct StubUseCase;

/* --------------------------------------------------
 * Class / Lesson / Set
 * -------------------------------------------------- */

#[async_trait]
impl AddClassUseCase for StubUseCase {
    async fn execute(&self, _command: AddClassCommand) -> Result<ClassRecord, AddClassError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteClassUseCase for StubUseCase {
    async fn execute(&self, _class_id: i32) -> Result<(), DeleteClassError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetClassesUseCase for StubUseCase {
    async fn execute(&self) -> Result<Vec<ClassRecord>, GetClassesError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl AddLessonUseCase for StubUseCase {
    async fn execute(&self, _command: AddLessonCommand) -> Result<LessonRecord, AddLessonError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteLessonUseCase for StubUseCase {
    async fn execute(&self, _lesson_id: i32) -> Result<(), DeleteLessonError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetLessonsUseCase for StubUseCase {
    async fn execute(&self) -> Result<Vec<LessonRecord>, GetLessonsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl AddSetUseCase for StubUseCase {
    async fn execute(&self, _command: AddSetCommand) -> Result<SetRecord, AddSetError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteSetUseCase for StubUseCase {
    async fn execute(&self, _set_id: i32) -> Result<(), DeleteSetError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSetsUseCase for StubUseCase {
    async fn execute(&self, _filter: SetListFilter) -> Result<Vec<SetView>, GetSetsError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Questions and answers
 * -------------------------------------------------- */

#[async_trait]
impl AddQuestionUseCase for StubUseCase {
    async fn execute(&self, _command: QuestionCommand) -> Result<QuestionRecord, AddQuestionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl EditQuestionUseCase for StubUseCase {
    async fn execute(
        &self,
        _question_id: i32,
        _command: QuestionCommand,
    ) -> Result<QuestionRecord, EditQuestionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetQuestionUseCase for StubUseCase {
    async fn execute(&self, _question_id: i32) -> Result<QuestionDetail, GetQuestionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetQuestionsUseCase for StubUseCase {
    async fn execute(
        &self,
        _filter: QuestionListFilter,
    ) -> Result<Vec<QuestionDetail>, GetQuestionsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetQuizUseCase for StubUseCase {
    async fn execute(&self, _filter: QuizFilter) -> Result<Vec<QuizQuestion>, GetQuizError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetAdminQuestionsUseCase for StubUseCase {
    async fn execute(
        &self,
        _filter: AdminQuestionFilter,
        _page: PageRequest,
    ) -> Result<Vec<AdminQuestionView>, GetAdminQuestionsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteQuestionUseCase for StubUseCase {
    async fn execute(&self, _question_id: i32) -> Result<(), DeleteQuestionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl AddAnswerUseCase for StubUseCase {
    async fn execute(&self, _command: AnswerCommand) -> Result<AnswerRecord, AddAnswerError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl EditAnswerUseCase for StubUseCase {
    async fn execute(
        &self,
        _answer_id: i32,
        _command: AnswerCommand,
    ) -> Result<AnswerRecord, EditAnswerError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteAnswerUseCase for StubUseCase {
    async fn execute(&self, _answer_id: i32) -> Result<(), DeleteAnswerError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Users
 * -------------------------------------------------- */

#[async_trait]
impl RegisterUserUseCase for StubUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<UserProfile, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RegisterAdminUseCase for StubUseCase {
    async fn execute(
        &self,
        _command: RegisterAdminCommand,
    ) -> Result<UserProfile, RegisterAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl LoginUserUseCase for StubUseCase {
    async fn execute(&self, _command: LoginUserCommand) -> Result<LoginResult, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetUsersUseCase for StubUseCase {
    async fn execute(
        &self,
        _filter: UserListFilter,
        _page: PageRequest,
    ) -> Result<Vec<UserSummary>, GetUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetUserUseCase for StubUseCase {
    async fn execute(&self, _user_id: i32) -> Result<UserSummary, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProfileUseCase for StubUseCase {
    async fn execute(&self, _user_id: i32) -> Result<UserProfile, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateUserUseCase for StubUseCase {
    async fn execute(&self, _command: UpdateUserCommand) -> Result<UserSummary, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteUserUseCase for StubUseCase {
    async fn execute(&self, _user_id: i32) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Activation
 * -------------------------------------------------- */

#[async_trait]
impl SendOtpUseCase for StubUseCase {
    async fn execute(&self, _command: SendOtpCommand) -> Result<(), SendOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CheckOtpUseCase for StubUseCase {
    async fn execute(&self, _command: CheckOtpCommand) -> Result<(), CheckOtpError> {
        unimplemented!("Not used in this test")
    }
}
