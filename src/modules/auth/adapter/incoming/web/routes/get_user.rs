use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::auth::application::ports::incoming::use_cases::GetUserError;
use crate::auth::application::ports::outgoing::UserSummary;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User retrieved", body = inline(DataResponse<UserSummary>)),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let user_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.user.get_single.execute(user_id).await {
        Ok(user) => ApiResponse::success("user retrieved successfully", user),
        Err(GetUserError::UserNotFound) => ApiResponse::not_found("user not found"),
        Err(GetUserError::QueryError(msg)) => {
            error!(user_id, "Failed to fetch user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
