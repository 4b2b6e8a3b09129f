use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::api::schemas::MessageResponse;
use crate::set::application::ports::incoming::use_cases::DeleteSetError;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/set/{id}",
    tag = "set",
    params(("id" = i32, Path, description = "Set id")),
    responses(
        (status = 200, description = "Set deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Set not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[delete("/api/set/{id}")]
pub async fn delete_set_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let set_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.set.delete.execute(set_id).await {
        Ok(()) => {
            info!(set_id, "Set deleted");
            ApiResponse::ok("set deleted successfully")
        }
        Err(DeleteSetError::SetNotFound) => ApiResponse::not_found("set not found"),
        Err(DeleteSetError::RepositoryError(msg)) => {
            error!(set_id, "Failed to delete set: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::application::ports::incoming::use_cases::DeleteSetUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockDeleteSet;

    #[async_trait]
    impl DeleteSetUseCase for MockDeleteSet {
        async fn execute(&self, set_id: i32) -> Result<(), DeleteSetError> {
            match set_id {
                1 => Ok(()),
                13 => Err(DeleteSetError::RepositoryError("lock timeout".to_string())),
                _ => Err(DeleteSetError::SetNotFound),
            }
        }
    }

    async fn delete(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_delete_set(MockDeleteSet)
            .build();
        let app = test::init_service(App::new().app_data(state).service(delete_set_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn deletes_set() {
        let (status, body) = delete("/api/set/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "set deleted successfully");
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn missing_set_is_not_found() {
        let (status, body) = delete("/api/set/2").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "set not found");
    }

    #[actix_web::test]
    async fn zero_id_is_rejected() {
        let (status, body) = delete("/api/set/0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid id");
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let (status, body) = delete("/api/set/13").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
    }
}
