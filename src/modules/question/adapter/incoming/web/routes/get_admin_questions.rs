use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::question::application::ports::incoming::use_cases::GetAdminQuestionsError;
use crate::question::application::ports::outgoing::{AdminQuestionFilter, AdminQuestionView};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetAdminQuestionsQuery {
    pub is_quiz: Option<bool>,
    /// Exact lesson name
    pub lesson: Option<String>,
    /// Exact class name
    pub class: Option<String>,
    /// Exact set name
    pub set: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl From<GetAdminQuestionsQuery> for (AdminQuestionFilter, PageRequest) {
    fn from(q: GetAdminQuestionsQuery) -> Self {
        let non_blank = |s: String| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        let filter = AdminQuestionFilter {
            is_quiz: q.is_quiz,
            lesson: q.lesson.and_then(non_blank),
            class: q.class.and_then(non_blank),
            set: q.set.and_then(non_blank),
        };
        (filter, PageRequest::new(q.page, q.limit))
    }
}

#[utoipa::path(
    get,
    path = "/api/admin-question",
    tag = "question",
    params(GetAdminQuestionsQuery),
    responses(
        (status = 200, description = "Questions with set, lesson and class names", body = inline(DataResponse<Vec<AdminQuestionView>>)),
        (status = 400, description = "Invalid query parameters", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/admin-question")]
pub async fn get_admin_questions_handler(
    query: web::Query<GetAdminQuestionsQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let (filter, page) = query.into_inner().into();

    match data.question.get_admin_list.execute(filter, page).await {
        Ok(questions) => ApiResponse::success("questions admin retrieved successfully", questions),
        Err(GetAdminQuestionsError::QueryError(msg)) => {
            error!("Failed to list admin questions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
