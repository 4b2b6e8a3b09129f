use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::auth::application::ports::incoming::use_cases::GetUsersError;
use crate::auth::application::ports::outgoing::{UserListFilter, UserSummary};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetUsersQuery {
    /// Case-insensitive match on name or email
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl From<GetUsersQuery> for (UserListFilter, PageRequest) {
    fn from(q: GetUsersQuery) -> Self {
        let filter = UserListFilter {
            search: q.search.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        };
        (filter, PageRequest::new(q.page, q.limit))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(GetUsersQuery),
    responses(
        (status = 200, description = "Users retrieved", body = inline(DataResponse<Vec<UserSummary>>)),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/users")]
pub async fn get_users_handler(
    query: web::Query<GetUsersQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let (filter, page) = query.into_inner().into();

    match data.user.get_list.execute(filter, page).await {
        Ok(users) => ApiResponse::success("users retrieved successfully", users),
        Err(GetUsersError::QueryError(msg)) => {
            error!("Failed to list users: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
