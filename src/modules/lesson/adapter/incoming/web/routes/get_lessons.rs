use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::lesson::application::ports::incoming::use_cases::GetLessonsError;
use crate::lesson::application::ports::outgoing::LessonRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/lesson",
    tag = "lesson",
    responses(
        (status = 200, description = "Lessons ordered by id", body = inline(DataResponse<Vec<LessonRecord>>)),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/lesson")]
pub async fn get_lessons_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.lesson.get_list.execute().await {
        Ok(lessons) => ApiResponse::success("lessons retrieved successfully", lessons),
        Err(GetLessonsError::QueryError(msg)) => {
            error!("Failed to list lessons: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
