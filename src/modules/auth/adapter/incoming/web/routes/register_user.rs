use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError,
};
use crate::auth::application::ports::outgoing::UserProfile;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for self-registration
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterUserRequest {
    #[schema(example = "Budi Santoso")]
    #[validate(length(min = 2, max = 20))]
    pub name: String,

    #[schema(example = "budi@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "rahasia123")]
    #[validate(length(max = 20))]
    pub password: String,
}

fn map_register_error(err: RegisterUserError, email: &str) -> HttpResponse {
    match &err {
        RegisterUserError::PasswordTooShort => ApiResponse::bad_request(&err.to_string()),
        RegisterUserError::EmailAlreadyRegistered => {
            warn!(email = %email, "Registration rejected, email in use");
            ApiResponse::conflict(&err.to_string())
        }
        RegisterUserError::HashingFailed(_) | RegisterUserError::RepositoryError(_) => {
            error!(email = %email, error = %err, "Failed to register user");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Self-registered accounts are verified immediately.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(DataResponse<UserProfile>)),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 409, description = "Email already registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    // The password length rule lives in the service
    let command = match RegisterUserCommand::new(req.name, req.email.clone(), req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.user.register.execute(command).await {
        Ok(user) => {
            info!(user_id = user.id, email = %user.email, "User registered");
            ApiResponse::created("user registered successfully", user)
        }
        Err(err) => map_register_error(err, &req.email),
    }
}
