use actix_web::{get, web, HttpResponse};
use tracing::{error, warn};

use crate::api::schemas::{DataResponse, MessageResponse, UnauthorizedResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::GetUserError;
use crate::auth::application::ports::outgoing::UserProfile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the signed-in user
///
/// The profile is re-read from the store on every call, so role or
/// activation changes show up without a new token.
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User retrieved", body = inline(DataResponse<UserProfile>)),
        (status = 401, description = "Missing or invalid token", body = UnauthorizedResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/me")]
pub async fn fetch_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> HttpResponse {
    match data.user.get_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success("user retrieved successfully", profile),
        Err(GetUserError::UserNotFound) => {
            warn!(user_id = user.user_id, "Valid token for a user that no longer exists");
            ApiResponse::not_found("user not found")
        }
        Err(GetUserError::QueryError(msg)) => {
            error!(user_id = user.user_id, "Failed to fetch profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
