use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::Validate;

use crate::activation::application::ports::incoming::use_cases::{SendOtpCommand, SendOtpError};
use crate::api::schemas::{MessageResponse, ValidationErrorResponse};
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SendOtpRequest {
    #[schema(example = "budi@example.com")]
    #[validate(email)]
    pub email: String,
}

/// Mail a fresh activation code
///
/// Any earlier code of the same user is replaced. The new code expires
/// two minutes after issue.
#[utoipa::path(
    post,
    path = "/api/activation/send-otp",
    tag = "activation",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP sent", body = MessageResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/activation/send-otp")]
pub async fn send_otp_handler(
    req: web::Json<SendOtpRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let command = match SendOtpCommand::new(req.email) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };
    let email = command.email().as_str().to_string();

    match data.activation.send_otp.execute(command).await {
        Ok(()) => {
            info!(email = %email, "OTP sent");
            ApiResponse::ok("OTP successfully sent to your email")
        }
        Err(SendOtpError::UserNotFound) => {
            warn!(email = %email, "OTP requested for unknown email");
            ApiResponse::not_found("user not found")
        }
        Err(err) => {
            error!(email = %email, error = %err, "Failed to send OTP");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::application::ports::incoming::use_cases::SendOtpUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockSendOtp;

    #[async_trait]
    impl SendOtpUseCase for MockSendOtp {
        async fn execute(&self, command: SendOtpCommand) -> Result<(), SendOtpError> {
            match command.email().as_str() {
                "budi@example.com" => Ok(()),
                "smtp@example.com" => Err(SendOtpError::MailFailed("connection refused".to_string())),
                _ => Err(SendOtpError::UserNotFound),
            }
        }
    }

    async fn post(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_send_otp(MockSendOtp).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(send_otp_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/activation/send-otp")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn sends_otp() {
        let (status, body) = post(json!({ "email": "budi@example.com" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "OTP successfully sent to your email");
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn unknown_email_is_not_found() {
        let (status, body) = post(json!({ "email": "rina@example.com" })).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "user not found");
    }

    #[actix_web::test]
    async fn mail_failure_is_internal_error() {
        let (status, _) = post(json!({ "email": "smtp@example.com" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn malformed_email_fails_validation() {
        let (status, body) = post(json!({ "email": "budi" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["data"]["email"].is_array());
    }
}
