use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::set::application::ports::incoming::use_cases::GetSetsError;
use crate::set::application::ports::outgoing::{SetListFilter, SetView};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSetsQuery {
    /// Exact lesson name
    pub lesson: Option<String>,
    /// Exact class name
    pub class: Option<String>,
    pub is_quiz: Option<bool>,
}

impl From<GetSetsQuery> for SetListFilter {
    fn from(q: GetSetsQuery) -> Self {
        let non_blank = |s: String| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        SetListFilter {
            lesson: q.lesson.and_then(non_blank),
            class: q.class.and_then(non_blank),
            is_quiz: q.is_quiz,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/set",
    tag = "set",
    params(GetSetsQuery),
    responses(
        (status = 200, description = "Sets ordered by id", body = inline(DataResponse<Vec<SetView>>)),
        (status = 400, description = "Invalid query parameters", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/set")]
pub async fn get_sets_handler(query: web::Query<GetSetsQuery>, data: web::Data<AppState>) -> HttpResponse {
    match data.set.get_list.execute(query.into_inner().into()).await {
        Ok(sets) => ApiResponse::success("sets retrieved successfully", sets),
        Err(GetSetsError::QueryError(msg)) => {
            error!("Failed to list sets: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
