use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::api::schemas::{DataResponse, MessageResponse};
use crate::class::application::ports::incoming::use_cases::GetClassesError;
use crate::class::application::ports::outgoing::ClassRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/class",
    tag = "class",
    responses(
        (status = 200, description = "Classes ordered by id", body = inline(DataResponse<Vec<ClassRecord>>)),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[get("/api/class")]
pub async fn get_classes_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.class.get_list.execute().await {
        Ok(classes) => ApiResponse::success("classes retrieved successfully", classes),
        Err(GetClassesError::QueryError(msg)) => {
            error!("Failed to list classes: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
