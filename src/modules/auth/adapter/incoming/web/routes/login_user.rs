use crate::api::schemas::{DataResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::auth::SESSION_COOKIE;
use crate::auth::application::ports::incoming::use_cases::{
    LoginResult, LoginUserCommand, LoginUserError,
};
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginUserRequest {
    #[schema(example = "budi@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "rahasia123")]
    #[validate(length(min = 6, max = 20))]
    pub password: String,
}

fn session_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
    let mut c = Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .finish();

    if max_age_seconds > 0 {
        c.set_max_age(CookieDuration::seconds(max_age_seconds));
    }
    c
}

fn map_login_error(err: LoginUserError, email: &str) -> HttpResponse {
    match &err {
        LoginUserError::UserNotFound => {
            warn!(email = %email, "Login for unknown email");
            ApiResponse::not_found("user not found")
        }
        LoginUserError::WrongPassword => {
            warn!(email = %email, "Login with wrong password");
            ApiResponse::bad_request("wrong password")
        }
        LoginUserError::HashingFailed(_)
        | LoginUserError::TokenFailed(_)
        | LoginUserError::QueryError(_) => {
            error!(email = %email, error = %err, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Sign in with email and password
///
/// Returns the session token in the body and also sets it as the
/// `token` cookie (HttpOnly, Secure, SameSite=Strict).
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "users",
    request_body = LoginUserRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(DataResponse<LoginResult>)),
        (status = 400, description = "Wrong password or invalid fields", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/login")]
pub async fn login_user_handler(
    req: web::Json<LoginUserRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let email = req.email.clone();
    let command = LoginUserCommand::new(req.email, req.password);

    match data.user.login.execute(command).await {
        Ok(result) => {
            info!(user_id = result.id, is_admin = result.is_admin, "User logged in");
            let cookie = session_cookie(result.token.clone(), result.expires_in);
            HttpResponse::Ok().cookie(cookie).json(ApiResponse {
                message: "Login successful".to_string(),
                data: Some(result),
            })
        }
        Err(err) => map_login_error(err, &email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockLogin {
        result: Result<LoginResult, LoginUserError>,
    }

    #[async_trait]
    impl LoginUserUseCase for MockLogin {
        async fn execute(&self, _command: LoginUserCommand) -> Result<LoginResult, LoginUserError> {
            self.result.clone()
        }
    }

    fn login_result() -> LoginResult {
        LoginResult {
            id: 42,
            email: "budi@example.com".to_string(),
            is_admin: false,
            is_verified: true,
            token: "signed.jwt.token".to_string(),
            expires_in: 604_800,
        }
    }

    async fn call(mock: MockLogin, body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_login_user(mock).build();
        let app = test::init_service(App::new().app_data(state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn login_returns_token_and_sets_cookie() {
        let resp = call(
            MockLogin { result: Ok(login_result()) },
            json!({ "email": "budi@example.com", "password": "rahasia1" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("session cookie");
        assert_eq!(cookie.value(), "signed.jwt.token");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(604_800)));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Login successful");
        assert_eq!(body["data"]["id"], 42);
        assert_eq!(body["data"]["token"], "signed.jwt.token");
        assert!(body["data"].get("expires_in").is_none());
    }

    #[actix_web::test]
    async fn unknown_email_is_not_found() {
        let resp = call(
            MockLogin { result: Err(LoginUserError::UserNotFound) },
            json!({ "email": "ghost@example.com", "password": "rahasia1" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "user not found");
    }

    #[actix_web::test]
    async fn wrong_password_is_bad_request() {
        let resp = call(
            MockLogin { result: Err(LoginUserError::WrongPassword) },
            json!({ "email": "budi@example.com", "password": "salah123" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "wrong password");
    }

    #[actix_web::test]
    async fn short_password_fails_validation() {
        let resp = call(
            MockLogin { result: Ok(login_result()) },
            json!({ "email": "budi@example.com", "password": "abc" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Validation failed");
        assert!(body["data"]["password"].is_array());
    }

    #[actix_web::test]
    async fn token_failure_is_internal_error() {
        let resp = call(
            MockLogin {
                result: Err(LoginUserError::TokenFailed("bad key".to_string())),
            },
            json!({ "email": "budi@example.com", "password": "rahasia1" }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.response().cookies().next().is_none());
    }
}
