use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterAdminCommand, RegisterAdminError,
};
use crate::auth::application::ports::outgoing::UserProfile;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterAdminRequest {
    #[schema(example = "Siti Admin")]
    #[validate(length(min = 2, max = 20))]
    pub name: String,

    #[schema(example = "siti@example.com")]
    #[validate(email)]
    pub email: String,
}

/// Provision an account from the admin console
///
/// The account is created unverified and without the admin role, using the
/// configured default password. It must be activated through the OTP flow.
#[utoipa::path(
    post,
    path = "/api/admin-check",
    tag = "users",
    request_body = RegisterAdminRequest,
    responses(
        (status = 201, description = "Account provisioned", body = inline(DataResponse<UserProfile>)),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 409, description = "Email already registered", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/admin-check")]
pub async fn register_admin_handler(
    req: web::Json<RegisterAdminRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let email = req.email.clone();
    let command = match RegisterAdminCommand::new(req.name, req.email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.user.register_admin.execute(command).await {
        Ok(user) => {
            info!(user_id = user.id, email = %user.email, "Admin account registered");
            ApiResponse::created("admin registered successfully", user)
        }
        Err(RegisterAdminError::EmailAlreadyRegistered) => {
            warn!(email = %email, "Admin registration rejected, email in use");
            ApiResponse::conflict("email already registered")
        }
        Err(err) => {
            error!(email = %email, error = %err, "Failed to register admin");
            ApiResponse::internal_error()
        }
    }
}
