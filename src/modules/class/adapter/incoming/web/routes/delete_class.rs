use actix_web::{delete, web, HttpResponse};
use tracing::{error, info};

use crate::api::schemas::MessageResponse;
use crate::class::application::ports::incoming::use_cases::DeleteClassError;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/class/{id}",
    tag = "class",
    params(("id" = i32, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = MessageResponse),
        (status = 404, description = "Class not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[delete("/api/class/{id}")]
pub async fn delete_class_handler(path: web::Path<i32>, data: web::Data<AppState>) -> HttpResponse {
    let class_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.class.delete.execute(class_id).await {
        Ok(()) => {
            info!(class_id, "Class deleted");
            ApiResponse::ok("class deleted successfully")
        }
        Err(DeleteClassError::ClassNotFound) => ApiResponse::not_found("class not found"),
        Err(DeleteClassError::RepositoryError(msg)) => {
            error!(class_id, "Failed to delete class: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
