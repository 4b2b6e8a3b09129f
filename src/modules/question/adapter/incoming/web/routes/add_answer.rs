use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::question::application::domain::AnswerCode;
use crate::question::application::ports::incoming::use_cases::{AddAnswerError, AnswerCommand};
use crate::question::application::ports::outgoing::AnswerRecord;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

fn validate_answer_code(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AnswerCode>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("oneof").with_message("must be one of a b c d esay".into()))
}

/// Body of both answer add and answer edit.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AnswerRequest {
    #[schema(example = 1)]
    #[validate(range(min = 1))]
    pub question_id: i32,

    #[schema(example = "a")]
    #[validate(custom(function = "validate_answer_code"))]
    pub code: String,

    #[schema(example = "56")]
    #[validate(length(min = 1))]
    pub content: String,

    pub img_url: Option<String>,

    #[serde(default)]
    pub is_answer: bool,
}

impl AnswerRequest {
    pub(super) fn into_command(self) -> Result<AnswerCommand, HttpResponse> {
        if let Err(resp) = validate_payload(&self) {
            return Err(resp);
        }
        AnswerCommand::new(
            self.question_id,
            &self.code,
            self.content,
            self.img_url,
            self.is_answer,
        )
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))
    }
}

#[utoipa::path(
    post,
    path = "/api/quiz-answer",
    tag = "question",
    request_body = AnswerRequest,
    responses(
        (status = 201, description = "Answer added", body = inline(DataResponse<AnswerRecord>)),
        (status = 400, description = "Validation failed or question does not exist", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/quiz-answer")]
pub async fn add_answer_handler(req: web::Json<AnswerRequest>, data: web::Data<AppState>) -> HttpResponse {
    let command = match req.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(resp) => return resp,
    };

    match data.question.add_answer.execute(command).await {
        Ok(answer) => {
            info!(answer_id = answer.id, question_id = answer.question_id, "Answer added");
            ApiResponse::created("answer added successfully", answer)
        }
        Err(err @ AddAnswerError::QuestionMissing) => ApiResponse::bad_request(&err.to_string()),
        Err(AddAnswerError::RepositoryError(msg)) => {
            error!("Failed to add answer: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
