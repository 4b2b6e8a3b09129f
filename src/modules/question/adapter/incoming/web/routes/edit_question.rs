use actix_web::{put, web, HttpResponse};
use tracing::{error, info};

use super::QuestionRequest;
use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::question::application::ports::incoming::use_cases::EditQuestionError;
use crate::question::application::ports::outgoing::QuestionRecord;
use crate::shared::api::{positive_id, ApiResponse};
use crate::AppState;

fn map_edit_error(err: EditQuestionError, question_id: i32) -> HttpResponse {
    match &err {
        EditQuestionError::QuestionNotFound => ApiResponse::not_found(&err.to_string()),
        EditQuestionError::NumberTaken => ApiResponse::conflict(&err.to_string()),
        EditQuestionError::SetMissing => ApiResponse::bad_request(&err.to_string()),
        EditQuestionError::RepositoryError(msg) => {
            error!(question_id, "Failed to update question: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/question/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Question id")),
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = inline(DataResponse<QuestionRecord>)),
        (status = 400, description = "Validation failed or set does not exist", body = ValidationErrorResponse),
        (status = 404, description = "Question not found", body = MessageResponse),
        (status = 409, description = "Number already used in the set", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[put("/api/question/{id}")]
pub async fn edit_question_handler(
    path: web::Path<i32>,
    req: web::Json<QuestionRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let question_id = match positive_id(path.into_inner()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let command = match req.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(resp) => return resp,
    };

    match data.question.edit.execute(question_id, command).await {
        Ok(question) => {
            info!(question_id, "Question updated");
            ApiResponse::success("question updated successfully", question)
        }
        Err(err) => map_edit_error(err, question_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::ports::incoming::use_cases::{
        EditQuestionUseCase, QuestionCommand,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockEditQuestion;

    #[async_trait]
    impl EditQuestionUseCase for MockEditQuestion {
        async fn execute(
            &self,
            question_id: i32,
            command: QuestionCommand,
        ) -> Result<QuestionRecord, EditQuestionError> {
            match question_id {
                404 => Err(EditQuestionError::QuestionNotFound),
                409 => Err(EditQuestionError::NumberTaken),
                _ => Ok(QuestionRecord {
                    id: question_id,
                    number: command.number(),
                    question_type: command.question_type().to_string(),
                    content: command.content().to_string(),
                    is_quiz: command.is_quiz(),
                    set_id: command.set_id(),
                }),
            }
        }
    }

    async fn put(uri: &str) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_edit_question(MockEditQuestion)
            .build();
        let app = test::init_service(App::new().app_data(state).service(edit_question_handler)).await;

        let req = test::TestRequest::put()
            .uri(uri)
            .set_json(json!({
                "number": 2,
                "type": "C5",
                "content": "Sebutkan planet terbesar",
                "is_quiz": false,
                "set_id": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn replaces_question() {
        let (status, body) = put("/api/question/8").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "question updated successfully");
        assert_eq!(body["data"]["type"], "C5");
        assert_eq!(body["data"]["is_quiz"], false);
    }

    #[actix_web::test]
    async fn maps_domain_errors() {
        let (status, body) = put("/api/question/404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "question not found");

        let (status, _) = put("/api/question/409").await;
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
