// src/shared/api/validation.rs
use crate::shared::api::ApiResponse;
use actix_web::{http::StatusCode, HttpResponse};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

/// Flattens validator output into `{ "field": ["message", ...] }`.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let mut details = Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|err| {
                let text = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                Value::String(text)
            })
            .collect::<Vec<_>>();
        details.insert(field.to_string(), Value::Array(messages));
    }

    Value::Object(details)
}

/// Runs the payload's validation rules, producing the 400 response on failure.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), HttpResponse> {
    payload.validate().map_err(|errors| {
        tracing::debug!("Request validation failed: {}", errors);
        ApiResponse::error_with_data(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            validation_details(&errors),
        )
    })
}

/// Path ids must be strictly positive.
pub fn positive_id(id: i32) -> Result<i32, HttpResponse> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ApiResponse::bad_request("invalid id"))
    }
}
