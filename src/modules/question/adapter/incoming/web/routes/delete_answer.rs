use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::api::schemas::MessageResponse;
use crate::question::application::ports::incoming::use_cases::DeleteAnswerError;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/quiz-answer/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Answer not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[delete("/api/quiz-answer/{id}")]
pub async fn delete_answer_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let answer_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.question.delete_answer.execute(answer_id).await {
        Ok(()) => {
            info!(answer_id, "Answer deleted");
            ApiResponse::ok("answer deleted successfully")
        }
        Err(DeleteAnswerError::AnswerNotFound) => ApiResponse::not_found("answer not found"),
        Err(DeleteAnswerError::RepositoryError(msg)) => {
            error!(answer_id, "Failed to delete answer: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
