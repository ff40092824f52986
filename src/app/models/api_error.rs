use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error returned from any handler. Rendered as
/// `{ "success": false, "error": message, "details": [...] }`.
#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(Serialize)]
struct ApiErrorBody<'a> {
    success: bool,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [String]>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            success: false,
            error: &self.message,
            details: self.details.as_deref(),
        };

        (self.code, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(
            status = %rejection.status(),
            "rejected request body: {}",
            rejection.body_text()
        );

        ApiError {
            code: rejection.status(),
            message: "Invalid request body".to_string(),
            details: Some(vec![rejection.body_text()]),
        }
    }
}
