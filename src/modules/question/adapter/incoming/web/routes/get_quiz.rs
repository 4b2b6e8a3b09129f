use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::question::application::domain::QuestionType;
use crate::question::application::ports::incoming::use_cases::GetQuizError;
use crate::question::application::ports::outgoing::{QuizFilter, QuizQuestion};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetQuizQuery {
    pub set_id: Option<i32>,
    /// One of C1..C6
    #[serde(rename = "type")]
    pub question_type: Option<String>,
    pub number: Option<i32>,
}

impl TryFrom<GetQuizQuery> for QuizFilter {
    type Error = String;

    fn try_from(q: GetQuizQuery) -> Result<Self, Self::Error> {
        let question_type = match q.question_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<QuestionType>()
                    .map_err(|_| "type must be one of C1 C2 C3 C4 C5 C6".to_string())?,
            ),
        };

        Ok(QuizFilter {
            set_id: q.set_id,
            question_type,
            number: q.number,
        })
    }
}

/// Quiz questions with their answer choices
#[utoipa::path(
    get,
    path = "/api/quiz",
    tag = "question",
    params(GetQuizQuery),
    responses(
        (status = 200, description = "Quiz questions ordered by number, answers by code", body = inline(DataResponse<Vec<QuizQuestion>>)),
        (status = 400, description = "Invalid query parameters", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/quiz")]
pub async fn get_quiz_handler(query: web::Query<GetQuizQuery>, data: web::Data<AppState>) -> HttpResponse {
    let filter = match QuizFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(msg) => return ApiResponse::bad_request(&msg),
    };

    match data.question.get_quiz.execute(filter).await {
        Ok(questions) => ApiResponse::success("questions retrieved successfully", questions),
        Err(GetQuizError::QueryError(msg)) => {
            error!("Failed to list quiz questions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
