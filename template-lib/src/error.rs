use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use template_repo::template_repo::TemplateRepoError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Repo(#[from] TemplateRepoError),
}

impl From<ValidationErrors> for HandlerError {
    fn from(e: ValidationErrors) -> Self {
        HandlerError::Validation(e.to_string())
    }
}

impl HandlerError {
    fn detail(&self) -> String {
        match self {
            HandlerError::Validation(message) | HandlerError::PayloadTooLarge(message) => {
                message.clone()
            }
            HandlerError::Repo(TemplateRepoError::TemplateAlreadyExists(_)) => {
                "Template code already exists".to_owned()
            }
            HandlerError::Repo(TemplateRepoError::TemplateNotFound(_)) => {
                "Template not found".to_owned()
            }
            HandlerError::Repo(TemplateRepoError::Other(_)) => "Internal Server Error".to_owned(),
        }
    }
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            HandlerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            HandlerError::Repo(TemplateRepoError::TemplateAlreadyExists(_)) => {
                StatusCode::BAD_REQUEST
            }
            HandlerError::Repo(TemplateRepoError::TemplateNotFound(_)) => StatusCode::NOT_FOUND,
            HandlerError::Repo(TemplateRepoError::Other(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        if let HandlerError::Repo(TemplateRepoError::Other(e)) = self {
            error!(error = ?e, "Store operation failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.detail() }))
    }
}
