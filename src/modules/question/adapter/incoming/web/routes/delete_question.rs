use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::api::schemas::MessageResponse;
use crate::question::application::ports::incoming::use_cases::DeleteQuestionError;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/question/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Question not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[delete("/api/question/{id}")]
pub async fn delete_question_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let question_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.question.delete.execute(question_id).await {
        Ok(()) => {
            info!(question_id, "Question deleted");
            ApiResponse::ok("question deleted successfully")
        }
        Err(DeleteQuestionError::QuestionNotFound) => ApiResponse::not_found("question not found"),
        Err(DeleteQuestionError::RepositoryError(msg)) => {
            error!(question_id, "Failed to delete question: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::ports::incoming::use_cases::DeleteQuestionUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockDeleteQuestion;

    #[async_trait]
    impl DeleteQuestionUseCase for MockDeleteQuestion {
        async fn execute(&self, question_id: i32) -> Result<(), DeleteQuestionError> {
            match question_id {
                1 => Ok(()),
                13 => Err(DeleteQuestionError::RepositoryError("lock timeout".to_string())),
                _ => Err(DeleteQuestionError::QuestionNotFound),
            }
        }
    }

    async fn delete(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_delete_question(MockDeleteQuestion)
            .build();
        let app = test::init_service(App::new().app_data(state).service(delete_question_handler)).await;

        let resp = test::call_service(&app, test::TestRequest::delete().uri(uri).to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn deletes_question() {
        let (status, body) = delete("/api/question/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "question deleted successfully");
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn missing_question_is_not_found() {
        let (status, body) = delete("/api/question/2").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "question not found");
    }

    #[actix_web::test]
    async fn zero_id_is_rejected() {
        let (status, body) = delete("/api/question/0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid id");
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let (status, body) = delete("/api/question/13").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "internal server error");
    }
}
