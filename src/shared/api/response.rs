// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Uniform envelope for every response body: `{ "message": ..., "data": ... }`.
///
/// `data` is always present and is `null` when there is nothing to return.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        })
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        })
    }

    pub fn error_with_data(status: StatusCode, message: &str, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            message: message.to_string(),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    /// Success without a payload (`data: null`).
    pub fn ok(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            message: message.to_string(),
            data: None,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            message: message.to_string(),
            data: None,
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(detail: &str) -> HttpResponse {
        ApiResponse::error_with_data(StatusCode::UNAUTHORIZED, "Unauthorized", detail)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_wraps_data_with_message() {
        let resp = ApiResponse::success("done", serde_json::json!({ "id": 1 }));

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["message"], "done");
        assert_eq!(json["data"]["id"], 1);
    }

    #[actix_web::test]
    async fn ok_serializes_null_data() {
        let resp = ApiResponse::ok("deleted");

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["message"], "deleted");
        assert!(json["data"].is_null());
        assert!(json.as_object().unwrap().contains_key("data"));
    }

    #[actix_web::test]
    async fn internal_error_hides_details() {
        let resp = ApiResponse::internal_error();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["message"], "internal server error");
        assert!(json["data"].is_null());
    }

    #[actix_web::test]
    async fn unauthorized_carries_reason_in_data() {
        let resp = ApiResponse::unauthorized("token not found");

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(resp).await;
        assert_eq!(json["message"], "Unauthorized");
        assert_eq!(json["data"], "token not found");
    }
}
