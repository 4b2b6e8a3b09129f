use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::question::application::ports::incoming::use_cases::GetQuestionsError;
use crate::question::application::ports::outgoing::{QuestionDetail, QuestionListFilter};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetQuestionsQuery {
    pub set_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/question",
    tag = "question",
    params(GetQuestionsQuery),
    responses(
        (status = 200, description = "Questions ordered by number", body = inline(DataResponse<Vec<QuestionDetail>>)),
        (status = 400, description = "Invalid query parameters", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/question")]
pub async fn get_questions_handler(
    query: web::Query<GetQuestionsQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let filter = QuestionListFilter {
        set_id: query.into_inner().set_id,
    };

    match data.question.get_list.execute(filter).await {
        Ok(questions) => ApiResponse::success("questions retrieved successfully", questions),
        Err(GetQuestionsError::QueryError(msg)) => {
            error!("Failed to list questions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
