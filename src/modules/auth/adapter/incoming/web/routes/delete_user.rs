use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::api::schemas::MessageResponse;
use crate::auth::application::ports::incoming::use_cases::DeleteUserError;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[delete("/api/users/{id}")]
pub async fn delete_user_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let user_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.user.delete.execute(user_id).await {
        Ok(()) => {
            info!(user_id, "User deleted");
            ApiResponse::ok("user deleted successfully")
        }
        Err(DeleteUserError::UserNotFound) => ApiResponse::not_found("user not found"),
        Err(DeleteUserError::RepositoryError(msg)) => {
            error!(user_id, "Failed to delete user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::DeleteUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockDelete;

    #[async_trait]
    impl DeleteUserUseCase for MockDelete {
        async fn execute(&self, user_id: i32) -> Result<(), DeleteUserError> {
            match user_id {
                1 => Ok(()),
                2 => Err(DeleteUserError::RepositoryError("deadlock".to_string())),
                _ => Err(DeleteUserError::UserNotFound),
            }
        }
    }

    async fn delete(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_delete_user(MockDelete).build();
        let app = test::init_service(App::new().app_data(state).service(delete_user_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn deletes_user() {
        let (status, body) = delete("/api/users/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "user deleted successfully");
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn missing_user_is_not_found() {
        let (status, body) = delete("/api/users/3").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "user not found");
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let (status, _) = delete("/api/users/2").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
