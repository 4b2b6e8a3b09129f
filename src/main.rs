pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{activation, auth, class, email, lesson, question, set};

use crate::activation::adapter::outgoing::{OsRngOtpGenerator, OtpRepositoryPostgres};
use crate::activation::application::ports::outgoing::SystemClock;
use crate::activation::application::services::{CheckOtpService, SendOtpService};
use crate::activation::application::ActivationUseCases;
use crate::api::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    DeleteUserService, GetUserService, GetUsersService, LoginUserService, RegisterAdminService,
    RegisterUserService, UpdateUserService,
};
use crate::auth::application::UserUseCases;
use crate::class::adapter::outgoing::{ClassQueryPostgres, ClassRepositoryPostgres};
use crate::class::application::services::{
    AddClassService, DeleteClassService, GetClassesService,
};
use crate::class::application::ClassUseCases;
use crate::config::{AppConfig, HasherKind};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::lesson::adapter::outgoing::{LessonQueryPostgres, LessonRepositoryPostgres};
use crate::lesson::application::services::{
    AddLessonService, DeleteLessonService, GetLessonsService,
};
use crate::lesson::application::LessonUseCases;
use crate::question::adapter::outgoing::{
    AnswerRepositoryPostgres, QuestionQueryPostgres, QuestionRepositoryPostgres,
};
use crate::question::application::services::{
    AddAnswerService, AddQuestionService, DeleteAnswerService, DeleteQuestionService,
    EditAnswerService, EditQuestionService, GetAdminQuestionsService, GetQuestionService,
    GetQuestionsService, GetQuizService,
};
use crate::question::application::QuestionUseCases;
use crate::set::adapter::outgoing::{SetQueryPostgres, SetRepositoryPostgres};
use crate::set::application::services::{AddSetService, DeleteSetService, GetSetsService};
use crate::set::application::SetUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub class: ClassUseCases,
    pub lesson: LessonUseCases,
    pub set: SetUseCases,
    pub question: QuestionUseCases,
    pub user: UserUseCases,
    pub activation: ActivationUseCases,
}

type StartupError = Box<dyn std::error::Error>;

fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // .env.{environment} first, then .env
    if dotenvy::from_filename(format!(".env.{env}")).is_err() {
        dotenvy::dotenv().ok();
    }
}

async fn connect(config: &AppConfig) -> Result<Arc<DatabaseConnection>, StartupError> {
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;

    if config.database.run_migrations {
        Migrator::up(&conn, None).await?;
        info!("Migrations applied");
    }

    Ok(Arc::new(conn))
}

fn build_state(
    db: &Arc<DatabaseConnection>,
    config: &AppConfig,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    mailer: Arc<dyn EmailSender>,
) -> AppState {
    let hasher: Arc<dyn PasswordHasher> = match config.password_hasher {
        HasherKind::Bcrypt => Arc::new(BcryptHasher::new()),
        HasherKind::Argon2 => Arc::new(Argon2Hasher::new()),
    };

    let class_repo = ClassRepositoryPostgres::new(Arc::clone(db));
    let class_query = ClassQueryPostgres::new(Arc::clone(db));
    let lesson_repo = LessonRepositoryPostgres::new(Arc::clone(db));
    let lesson_query = LessonQueryPostgres::new(Arc::clone(db));
    let set_repo = SetRepositoryPostgres::new(Arc::clone(db));
    let set_query = SetQueryPostgres::new(Arc::clone(db));
    let question_repo = QuestionRepositoryPostgres::new(Arc::clone(db));
    let question_query = QuestionQueryPostgres::new(Arc::clone(db));
    let answer_repo = AnswerRepositoryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let otp_repo = OtpRepositoryPostgres::new(Arc::clone(db));

    let clock = Arc::new(SystemClock);

    AppState {
        class: ClassUseCases {
            add: Arc::new(AddClassService::new(class_repo.clone())),
            delete: Arc::new(DeleteClassService::new(class_repo)),
            get_list: Arc::new(GetClassesService::new(class_query)),
        },
        lesson: LessonUseCases {
            add: Arc::new(AddLessonService::new(lesson_repo.clone())),
            delete: Arc::new(DeleteLessonService::new(lesson_repo)),
            get_list: Arc::new(GetLessonsService::new(lesson_query)),
        },
        set: SetUseCases {
            add: Arc::new(AddSetService::new(set_repo.clone())),
            delete: Arc::new(DeleteSetService::new(set_repo)),
            get_list: Arc::new(GetSetsService::new(set_query)),
        },
        question: QuestionUseCases {
            add: Arc::new(AddQuestionService::new(question_repo.clone())),
            edit: Arc::new(EditQuestionService::new(question_repo.clone())),
            get_single: Arc::new(GetQuestionService::new(question_query.clone())),
            get_list: Arc::new(GetQuestionsService::new(question_query.clone())),
            get_quiz: Arc::new(GetQuizService::new(question_query.clone())),
            get_admin_list: Arc::new(GetAdminQuestionsService::new(question_query)),
            delete: Arc::new(DeleteQuestionService::new(question_repo)),
            add_answer: Arc::new(AddAnswerService::new(answer_repo.clone())),
            edit_answer: Arc::new(EditAnswerService::new(answer_repo.clone())),
            delete_answer: Arc::new(DeleteAnswerService::new(answer_repo)),
        },
        user: UserUseCases {
            register: Arc::new(RegisterUserService::new(user_repo.clone(), hasher.clone())),
            register_admin: Arc::new(RegisterAdminService::new(
                user_repo.clone(),
                hasher.clone(),
                config.admin_default_password.clone(),
            )),
            login: Arc::new(LoginUserService::new(
                user_query.clone(),
                hasher.clone(),
                token_provider,
            )),
            get_list: Arc::new(GetUsersService::new(user_query.clone())),
            get_single: Arc::new(GetUserService::new(user_query.clone())),
            get_profile: Arc::new(GetUserService::new(user_query.clone())),
            update: Arc::new(UpdateUserService::new(user_repo.clone(), hasher)),
            delete: Arc::new(DeleteUserService::new(user_repo.clone())),
        },
        activation: ActivationUseCases {
            send_otp: Arc::new(SendOtpService::new(
                user_query.clone(),
                otp_repo.clone(),
                Arc::new(OsRngOtpGenerator),
                mailer,
                clock.clone(),
            )),
            check_otp: Arc::new(CheckOtpService::new(user_query, user_repo, otp_repo, clock)),
        },
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::activation::adapter::incoming::web::routes as activation_routes;
    use crate::auth::adapter::incoming::web::routes as user_routes;
    use crate::class::adapter::incoming::web::routes as class_routes;
    use crate::lesson::adapter::incoming::web::routes as lesson_routes;
    use crate::question::adapter::incoming::web::routes as question_routes;
    use crate::set::adapter::incoming::web::routes as set_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Class
    cfg.service(class_routes::add_class_handler);
    cfg.service(class_routes::get_classes_handler);
    cfg.service(class_routes::delete_class_handler);
    // Lesson
    cfg.service(lesson_routes::add_lesson_handler);
    cfg.service(lesson_routes::get_lessons_handler);
    cfg.service(lesson_routes::delete_lesson_handler);
    // Set
    cfg.service(set_routes::add_set_handler);
    cfg.service(set_routes::get_sets_handler);
    cfg.service(set_routes::delete_set_handler);
    // Question
    cfg.service(question_routes::add_question_handler);
    cfg.service(question_routes::get_questions_handler);
    cfg.service(question_routes::get_question_handler);
    cfg.service(question_routes::edit_question_handler);
    cfg.service(question_routes::delete_question_handler);
    cfg.service(question_routes::get_quiz_handler);
    cfg.service(question_routes::get_admin_questions_handler);
    cfg.service(question_routes::add_answer_handler);
    cfg.service(question_routes::edit_answer_handler);
    cfg.service(question_routes::delete_answer_handler);
    // Users
    cfg.service(user_routes::register_user_handler);
    cfg.service(user_routes::register_admin_handler);
    cfg.service(user_routes::login_user_handler);
    cfg.service(user_routes::fetch_me_handler);
    cfg.service(user_routes::get_users_handler);
    cfg.service(user_routes::get_user_handler);
    cfg.service(user_routes::update_user_handler);
    cfg.service(user_routes::delete_user_handler);
    // Activation
    cfg.service(activation_routes::send_otp_handler);
    cfg.service(activation_routes::check_otp_handler);
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(environment = %config.environment, "Starting application...");

    let db = connect(&config).await?;

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let mailer: Arc<dyn EmailSender> = Arc::new(SmtpEmailSender::from_config(&config.smtp)?);

    let state = build_state(&db, &config, Arc::clone(&token_provider), mailer);
    let openapi = ApiDoc::openapi();

    let bind = (config.server.host.clone(), config.server.port);
    info!(host = %bind.0, port = bind.1, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
