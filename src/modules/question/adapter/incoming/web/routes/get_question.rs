use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::question::application::ports::incoming::use_cases::GetQuestionError;
use crate::question::application::ports::outgoing::QuestionDetail;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/question/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question retrieved", body = inline(DataResponse<QuestionDetail>)),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Question not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/question/{id}")]
pub async fn get_question_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let question_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.question.get_single.execute(question_id).await {
        Ok(question) => ApiResponse::success("question retrieved successfully", question),
        Err(GetQuestionError::QuestionNotFound) => ApiResponse::not_found("question not found"),
        Err(GetQuestionError::QueryError(msg)) => {
            error!(question_id, "Failed to fetch question: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
