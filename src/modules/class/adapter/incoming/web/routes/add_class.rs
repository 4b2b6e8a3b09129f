use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::class::application::domain::is_valid_class_name;
use crate::class::application::ports::incoming::use_cases::{AddClassCommand, AddClassError};
use crate::class::application::ports::outgoing::ClassRecord;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

fn validate_class_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_class_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new("oneof").with_message("must be one of 1 2 3 4 5 6".into()))
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddClassRequest {
    #[schema(example = "4")]
    #[validate(custom(function = "validate_class_name"))]
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/class",
    tag = "class",
    request_body = AddClassRequest,
    responses(
        (status = 201, description = "Class added", body = inline(DataResponse<ClassRecord>)),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/class")]
pub async fn add_class_handler(
    req: web::Json<AddClassRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let req = req.into_inner();
    if let Err(resp) = validate_payload(&req) {
        return resp;
    }

    let command = match AddClassCommand::new(req.name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    match data.class.add.execute(command).await {
        Ok(class) => {
            info!(class_id = class.id, name = %class.name, "Class added");
            ApiResponse::created("class added successfully", class)
        }
        Err(AddClassError::RepositoryError(msg)) => {
            error!("Failed to add class: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
