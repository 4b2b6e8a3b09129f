use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::api::schemas::{DataResponse, MessageResponse, ValidationErrorResponse};
use crate::question::application::domain::QuestionType;
use crate::question::application::ports::incoming::use_cases::{
    AddQuestionError, QuestionCommand,
};
use crate::question::application::ports::outgoing::QuestionRecord;
use crate::shared::api::{validate_payload, ApiResponse};
use crate::AppState;

fn validate_question_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<QuestionType>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("oneof").with_message("must be one of C1 C2 C3 C4 C5 C6".into()))
}

/// Body of both question add and question edit.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct QuestionRequest {
    #[schema(example = 1)]
    #[validate(range(min = 1))]
    pub number: i32,

    #[serde(rename = "type")]
    #[schema(example = "C1")]
    #[validate(custom(function = "validate_question_type"))]
    pub question_type: String,

    #[schema(example = "Berapakah hasil dari 7 x 8?")]
    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default)]
    pub is_quiz: bool,

    #[schema(example = 1)]
    #[validate(range(min = 1))]
    pub set_id: i32,
}

impl QuestionRequest {
    pub(super) fn into_command(self) -> Result<QuestionCommand, HttpResponse> {
        if let Err(resp) = validate_payload(&self) {
            return Err(resp);
        }
        QuestionCommand::new(
            self.number,
            &self.question_type,
            self.content,
            self.is_quiz,
            self.set_id,
        )
        .map_err(|e| ApiResponse::bad_request(&e.to_string()))
    }
}

#[utoipa::path(
    post,
    path = "/api/question",
    tag = "question",
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Question added", body = inline(DataResponse<QuestionRecord>)),
        (status = 400, description = "Validation failed or set does not exist", body = ValidationErrorResponse),
        (status = 409, description = "Number already used in the set", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[post("/api/question")]
pub async fn add_question_handler(
    req: web::Json<QuestionRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let command = match req.into_inner().into_command() {
        Ok(cmd) => cmd,
        Err(resp) => return resp,
    };

    match data.question.add.execute(command).await {
        Ok(question) => {
            info!(question_id = question.id, set_id = question.set_id, "Question added");
            ApiResponse::created("question added successfully", question)
        }
        Err(err @ AddQuestionError::NumberTaken) => {
            warn!("Rejected duplicate question number");
            ApiResponse::conflict(&err.to_string())
        }
        Err(err @ AddQuestionError::SetMissing) => ApiResponse::bad_request(&err.to_string()),
        Err(AddQuestionError::RepositoryError(msg)) => {
            error!("Failed to add question: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
