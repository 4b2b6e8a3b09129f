// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::{
    http::StatusCode,
    web::{JsonConfig, PathConfig, QueryConfig},
};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::error_with_data(StatusCode::BAD_REQUEST, "Invalid request body", detail),
        )
        .into()
    })
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request("invalid id"))
            .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::error_with_data(
                StatusCode::BAD_REQUEST,
                "Invalid query parameters",
                detail,
            ),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[allow(dead_code)]
        name: String,
    }

    #[derive(Deserialize)]
    struct Filter {
        #[allow(dead_code)]
        page: Option<u64>,
    }

    #[post("/echo")]
    async fn echo(_body: web::Json<Body>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[get("/item/{id}")]
    async fn item(_id: web::Path<i32>, _q: web::Query<Filter>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_json_returns_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid request body");
        assert!(body["data"].is_string());
    }

    #[actix_web::test]
    async fn non_numeric_path_id_returns_invalid_id() {
        let app = test::init_service(
            App::new()
                .app_data(custom_path_config())
                .app_data(custom_query_config())
                .service(item),
        )
        .await;

        let req = test::TestRequest::get().uri("/item/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "invalid id");
    }

    #[actix_web::test]
    async fn bad_query_returns_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(custom_path_config())
                .app_data(custom_query_config())
                .service(item),
        )
        .await;

        let req = test::TestRequest::get().uri("/item/1?page=x").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid query parameters");
    }
}
