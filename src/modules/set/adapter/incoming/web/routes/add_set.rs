use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::set::application::ports::incoming::use_cases::{AddSetCommand, AddSetError};
use crate::set::application::ports::outgoing::SetRecord;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddSetRequest {
    #[schema(example = "Latihan 1")]
    #[validate(length(min = 2, max = 20))]
    pub name: String,

    #[schema(example = 1)]
    #[validate(range(min = 1))]
    pub lesson_id: i32,

    #[schema(example = 4)]
    #[validate(range(min = 1))]
    pub class_id: i32,

    #[serde(default)]
    pub is_quiz: bool,
}

#[utoipa::path(
    post,
    path = "/api/set",
    tag = "set",
    request_body = AddSetRequest,
    responses(
        (status = 201, description = "Set added", body = inline(DataResponse<SetRecord>)),
        (status = 400, description = "Validation failed or unknown lesson/class", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/set")]
pub async fn add_set_handler(req: web::Json<AddSetRequest>, data: web::Data<AppState>) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let command = match AddSetCommand::new(req.name, req.lesson_id, req.class_id, req.is_quiz) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.set.add.execute(command).await {
        Ok(set) => {
            info!(set_id = set.id, lesson_id = set.lesson_id, class_id = set.class_id, "Set added");
            ApiResponse::created("set added successfully", set)
        }
        Err(err @ AddSetError::LessonOrClassMissing) => ApiResponse::bad_request(&err.to_string()),
        Err(AddSetError::RepositoryError(msg)) => {
            error!("Failed to add set: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::application::ports::incoming::use_cases::AddSetUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockAddSet;

    #[async_trait]
    impl AddSetUseCase for MockAddSet {
        async fn execute(&self, command: AddSetCommand) -> Result<SetRecord, AddSetError> {
            match command.lesson_id() {
                99 => Err(AddSetError::LessonOrClassMissing),
                500 => Err(AddSetError::RepositoryError("insert failed".to_string())),
                _ => Ok(SetRecord {
                    id: 3,
                    name: command.name().to_string(),
                    lesson_id: command.lesson_id(),
                    class_id: command.class_id(),
                    is_quiz: command.is_quiz(),
                }),
            }
        }
    }

    async fn post(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_add_set(MockAddSet).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(add_set_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/set").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn adds_set() {
        let (status, body) = post(json!({
            "name": "Kuis Akhir",
            "lesson_id": 1,
            "class_id": 4,
            "is_quiz": true
        }))
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "set added successfully");
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["is_quiz"], true);
    }

    #[actix_web::test]
    async fn is_quiz_defaults_to_false() {
        let (status, body) = post(json!({ "name": "Latihan", "lesson_id": 1, "class_id": 1 })).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["is_quiz"], false);
    }

    #[actix_web::test]
    async fn unknown_reference_is_bad_request() {
        let (status, body) = post(json!({ "name": "Latihan", "lesson_id": 99, "class_id": 1 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "lesson or class does not exist");
    }

    #[actix_web::test]
    async fn zero_ids_fail_validation() {
        let (status, body) = post(json!({ "name": "Latihan", "lesson_id": 0, "class_id": 0 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation failed");
        assert!(body["data"]["lesson_id"].is_array());
        assert!(body["data"]["class_id"].is_array());
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let (status, _) = post(json!({ "name": "Latihan", "lesson_id": 500, "class_id": 1 })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
