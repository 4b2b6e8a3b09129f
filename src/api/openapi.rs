use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{MessageResponse, UnauthorizedResponse, ValidationErrorResponse};

use crate::activation::adapter::incoming::web::routes::{CheckOtpRequest, SendOtpRequest};
use crate::auth::adapter::incoming::web::routes::{
    LoginUserRequest, RegisterAdminRequest, RegisterUserRequest, UpdateUserRequest,
};
use crate::auth::application::ports::incoming::use_cases::LoginResult;
use crate::auth::application::ports::outgoing::{UserProfile, UserSummary};
use crate::class::adapter::incoming::web::routes::AddClassRequest;
use crate::class::application::ports::outgoing::ClassRecord;
use crate::lesson::adapter::incoming::web::routes::AddLessonRequest;
use crate::lesson::application::ports::outgoing::LessonRecord;
use crate::question::adapter::incoming::web::routes::{AnswerRequest, QuestionRequest};
use crate::question::application::domain::{AnswerCode, QuestionType};
use crate::question::application::ports::outgoing::{
    AdminQuestionView, AnswerRecord, QuestionDetail, QuestionRecord, QuizAnswer, QuizQuestion,
};
use crate::set::adapter::incoming::web::routes::AddSetRequest;
use crate::set::application::ports::outgoing::{SetRecord, SetView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quiz API",
        version = "1.0.0",
        description = "Classes, lessons, question sets, quizzes and user activation"
    ),
    paths(
        // Class endpoints
        crate::class::adapter::incoming::web::routes::add_class_handler,
        crate::class::adapter::incoming::web::routes::get_classes_handler,
        crate::class::adapter::incoming::web::routes::delete_class_handler,

        // Lesson endpoints
        crate::lesson::adapter::incoming::web::routes::add_lesson_handler,
        crate::lesson::adapter::incoming::web::routes::get_lessons_handler,
        crate::lesson::adapter::incoming::web::routes::delete_lesson_handler,

        // Set endpoints
        crate::set::adapter::incoming::web::routes::add_set_handler,
        crate::set::adapter::incoming::web::routes::get_sets_handler,
        crate::set::adapter::incoming::web::routes::delete_set_handler,

        // Question endpoints
        crate::question::adapter::incoming::web::routes::add_question_handler,
        crate::question::adapter::incoming::web::routes::edit_question_handler,
        crate::question::adapter::incoming::web::routes::get_question_handler,
        crate::question::adapter::incoming::web::routes::get_questions_handler,
        crate::question::adapter::incoming::web::routes::get_quiz_handler,
        crate::question::adapter::incoming::web::routes::get_admin_questions_handler,
        crate::question::adapter::incoming::web::routes::delete_question_handler,
        crate::question::adapter::incoming::web::routes::add_answer_handler,
        crate::question::adapter::incoming::web::routes::edit_answer_handler,
        crate::question::adapter::incoming::web::routes::delete_answer_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::register_admin_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::get_users_handler,
        crate::auth::adapter::incoming::web::routes::get_user_handler,
        crate::auth::adapter::incoming::web::routes::update_user_handler,
        crate::auth::adapter::incoming::web::routes::delete_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_me_handler,

        // Activation endpoints
        crate::activation::adapter::incoming::web::routes::send_otp_handler,
        crate::activation::adapter::incoming::web::routes::check_otp_handler,
    ),
    components(
        schemas(
            // Envelopes
            MessageResponse,
            ValidationErrorResponse,
            UnauthorizedResponse,

            // Requests
            AddClassRequest,
            AddLessonRequest,
            AddSetRequest,
            QuestionRequest,
            AnswerRequest,
            RegisterUserRequest,
            RegisterAdminRequest,
            LoginUserRequest,
            UpdateUserRequest,
            SendOtpRequest,
            CheckOtpRequest,

            // Payloads
            ClassRecord,
            LessonRecord,
            SetRecord,
            SetView,
            QuestionType,
            AnswerCode,
            QuestionRecord,
            QuestionDetail,
            QuizQuestion,
            QuizAnswer,
            AdminQuestionView,
            AnswerRecord,
            UserSummary,
            UserProfile,
            LoginResult
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "classes", description = "Class management"),
        (name = "lessons", description = "Lesson management"),
        (name = "sets", description = "Question set management"),
        (name = "questions", description = "Questions, quiz delivery and answer choices"),
        (name = "users", description = "Registration, login and user management"),
        (name = "activation", description = "Account activation through emailed OTP"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/login"))
                        .build(),
                ),
            )
        }
    }
}
