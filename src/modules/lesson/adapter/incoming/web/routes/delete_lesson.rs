use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::api::schemas::MessageResponse;
use crate::lesson::application::ports::incoming::use_cases::DeleteLessonError;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/lesson/{id}",
    tag = "lesson",
    params(("id" = i32, Path, description = "Lesson id")),
    responses(
        (status = 200, description = "Lesson deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Lesson not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[delete("/api/lesson/{id}")]
pub async fn delete_lesson_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let lesson_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.lesson.delete.execute(lesson_id).await {
        Ok(()) => {
            info!(lesson_id, "Lesson deleted");
            ApiResponse::ok("lesson deleted successfully")
        }
        Err(DeleteLessonError::LessonNotFound) => ApiResponse::not_found("lesson not found"),
        Err(DeleteLessonError::RepositoryError(msg)) => {
            error!(lesson_id, "Failed to delete lesson: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
