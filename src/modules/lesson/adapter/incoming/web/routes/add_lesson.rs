use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::lesson::application::ports::incoming::use_cases::{AddLessonCommand, AddLessonError};
use crate::lesson::application::ports::outgoing::LessonRecord;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddLessonRequest {
    #[schema(example = "Matematika")]
    #[validate(length(min = 2, max = 20))]
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/lesson",
    tag = "lesson",
    request_body = AddLessonRequest,
    responses(
        (status = 201, description = "Lesson added", body = inline(DataResponse<LessonRecord>)),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/lesson")]
pub async fn add_lesson_handler(
    req: web::Json<AddLessonRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let command = match AddLessonCommand::new(req.name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.lesson.add.execute(command).await {
        Ok(lesson) => {
            info!(lesson_id = lesson.id, name = %lesson.name, "Lesson added");
            ApiResponse::created("lesson added successfully", lesson)
        }
        Err(AddLessonError::RepositoryError(msg)) => {
            error!("Failed to add lesson: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
