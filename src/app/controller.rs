use axum::Json;
use serde_json::Value;

use super::service;

pub async fn get_root() -> Json<Value> {
    Json(service::get_root())
}

pub async fn get_health() -> Json<Value> {
    Json(service::get_health())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use chrono::DateTime;

    use crate::test_helpers::{body_json, get, test_state};

    #[tokio::test]
    async fn health_reports_ok_with_timestamp() {
        let state = test_state("http://localhost:5678/webhook/Contact");

        let response = get(state, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "Contact Form API");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn root_describes_service() {
        let state = test_state("http://localhost:5678/webhook/Contact");

        let response = get(state, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Contact Form API");
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["endpoints"]["health"], "/health");
        assert_eq!(body["endpoints"]["contact"], "/contact (POST)");
        assert!(body["documentation"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let state = test_state("http://localhost:5678/webhook/Contact");

        let response = get(state, "/nope").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
