use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use validator::Validate;

use crate::activation::application::ports::incoming::use_cases::{
    CheckOtpCommand, CheckOtpError,
};
use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CheckOtpRequest {
    /// User id
    #[schema(example = 42)]
    #[validate(range(min = 1))]
    pub id: i32,

    #[schema(example = "048213")]
    #[validate(length(min = 1))]
    pub otp: String,
}

fn map_check_error(err: CheckOtpError, user_id: i32) -> HttpResponse {
    match &err {
        CheckOtpError::UserNotFound => ApiResponse::not_found("user not found"),
        CheckOtpError::OtpNotFound | CheckOtpError::OtpMismatch | CheckOtpError::OtpExpired => {
            ApiResponse::bad_request(&err.to_string())
        }
        CheckOtpError::QueryError(_) | CheckOtpError::RepositoryError(_) => {
            error!(user_id, error = %err, "Failed to check OTP");
            ApiResponse::internal_error()
        }
    }
}

/// Validate an activation code
///
/// On success the account is marked verified. The code is kept and keeps
/// validating until it expires.
#[utoipa::path(
    post,
    path = "/api/activation/check-otp",
    tag = "activation",
    request_body = CheckOtpRequest,
    responses(
        (status = 200, description = "OTP valid, user verified", body = MessageResponse),
        (status = 400, description = "OTP missing, mismatched or expired", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/activation/check-otp")]
pub async fn check_otp_handler(
    req: web::Json<CheckOtpRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let user_id = req.id;
    let command = match CheckOtpCommand::new(req.id, req.otp) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.activation.check_otp.execute(command).await {
        Ok(()) => {
            info!(user_id, "OTP accepted");
            ApiResponse::ok("Valid")
        }
        Err(err) => map_check_error(err, user_id),
    }
}
