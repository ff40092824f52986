use axum::http::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

use super::util::webhook::WebhookError;

#[derive(Debug)]
pub enum ContactApiError {
    ValidationFailed(Vec<String>),
    ServiceUnavailable,
    ProcessingFailed,
    InternalServerError,
}

impl ContactApiError {
    pub fn value(self) -> ApiError {
        match self {
            Self::ValidationFailed(details) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Validation failed".to_string(),
                details: Some(details),
            },
            Self::ServiceUnavailable => ApiError {
                code: StatusCode::SERVICE_UNAVAILABLE,
                message: "Service temporarily unavailable. Please try again later.".to_string(),
                details: None,
            },
            Self::ProcessingFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to process your message. Please try again.".to_string(),
                details: None,
            },
            Self::InternalServerError => DefaultApiError::InternalServerError.value(),
        }
    }
}

impl From<WebhookError> for ContactApiError {
    fn from(e: WebhookError) -> Self {
        match e {
            WebhookError::Unreachable(_) => Self::ServiceUnavailable,
            WebhookError::Rejected(_) => Self::ProcessingFailed,
            WebhookError::Failed(_) => Self::InternalServerError,
        }
    }
}
