// src/api/schemas.rs
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Envelope carrying a payload
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct DataResponse<T> {
    #[schema(example = "class added successfully")]
    pub message: String,
    pub data: T,
}

/// Envelope without payload (`data` is always null)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "class not found")]
    pub message: String,
    #[schema(value_type = Option<String>, nullable)]
    pub data: Option<()>,
}

/// 400 returned when request fields fail validation
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = "Validation failed")]
    pub message: String,
    /// Field name to list of failed rules
    pub data: HashMap<String, Vec<String>>,
}

/// 401 returned by protected routes
#[derive(Serialize, ToSchema)]
pub struct UnauthorizedResponse {
    #[schema(example = "Unauthorized")]
    pub message: String,
    #[schema(example = "token not found")]
    pub data: String,
}
