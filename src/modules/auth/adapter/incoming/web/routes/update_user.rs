use actix_web::{put, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::auth::application::ports::incoming::use_cases::{UpdateUserCommand, UpdateUserError};
use crate::auth::application::ports::outgoing::UserSummary;
use crate::shared::api::{positive_id, validate_payload, ApiResponse};
use crate::AppState;

/// Full replacement of name, email and picture. The password is re-hashed
/// only when one is supplied.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[schema(example = "Budi Santoso")]
    #[validate(length(min = 2, max = 20))]
    pub name: String,

    #[schema(example = "budi@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "baru12345")]
    #[validate(length(max = 20))]
    pub password: Option<String>,

    #[schema(example = "https://cdn.example.com/u/1.png")]
    pub img_url: Option<String>,
}

fn map_update_error(err: UpdateUserError, user_id: i32) -> HttpResponse {
    match &err {
        UpdateUserError::UserNotFound => ApiResponse::not_found("user not found"),
        UpdateUserError::EmailAlreadyRegistered => ApiResponse::conflict(&err.to_string()),
        UpdateUserError::PasswordTooShort => ApiResponse::bad_request(&err.to_string()),
        UpdateUserError::HashingFailed(_) | UpdateUserError::RepositoryError(_) => {
            error!(user_id, error = %err, "Failed to update user");
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = inline(DataResponse<UserSummary>)),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 409, description = "Email already registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[put("/api/users/{id}")]
pub async fn update_user_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let user_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let command =
        match UpdateUserCommand::new(user_id, req.name, req.email, req.password, req.img_url) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request(&e.to_string()),
        };

    match data.user.update.execute(command).await {
        Ok(user) => {
            info!(user_id, "User updated");
            ApiResponse::success("user updated successfully", user)
        }
        Err(err) => map_update_error(err, user_id),
    }
}
