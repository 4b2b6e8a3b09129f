use actix_web::{put, web, HttpResponse};
use tracing::{error, info};

use super::AnswerRequest;
use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::question::application::ports::incoming::use_cases::EditAnswerError;
use crate::question::application::ports::outgoing::AnswerRecord;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/quiz-answer/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Answer id")),
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Answer updated", body = inline(DataResponse<AnswerRecord>)),
        (status = 400, description = "Validation failed or question does not exist", body = ValidationErrorResponse),
        (status = 404, description = "Answer not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[put("/api/quiz-answer/{id}")]
pub async fn edit_answer_handler(
    path: web::Path<i32>,
    req: web::Json<AnswerRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let answer_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let command = match req.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(resp) => return resp,
    };

    match data.question.edit_answer.execute(answer_id, command).await {
        Ok(answer) => {
            info!(answer_id, "Answer updated");
            ApiResponse::success("answer updated successfully", answer)
        }
        Err(EditAnswerError::AnswerNotFound) => ApiResponse::not_found("answer not found"),
        Err(err @ EditAnswerError::QuestionMissing) => ApiResponse::bad_request(&err.to_string()),
        Err(EditAnswerError::RepositoryError(msg)) => {
            error!(answer_id, "Failed to update answer: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
