use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal server error. Please try again later.".to_string(),
                details: None,
            },
        }
    }
}

/// Failures that stop the process before it starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to read environment: {0}")]
    Environment(#[from] envy::Error),
    #[error("N8N_WEBHOOK_URL {0:?} is not a valid url: {1}")]
    InvalidWebhookUrl(String, url::ParseError),
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
