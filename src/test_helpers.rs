use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{app::env::Envy, app::util::reqwest::build_client, create_router, AppState};

pub fn test_state(webhook_url: &str) -> AppState {
    test_state_with_timeout(webhook_url, Duration::from_secs(10))
}

pub fn test_state_with_timeout(webhook_url: &str, timeout: Duration) -> AppState {
    let envy = Envy {
        n8n_webhook_url: Some(webhook_url.to_string()),
        ..Default::default()
    };

    AppState {
        envy: Arc::new(envy),
        http_client: build_client(timeout).unwrap(),
    }
}

pub async fn get(state: AppState, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    create_router(state).oneshot(request).await.unwrap()
}

pub async fn post_json(state: AppState, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    create_router(state).oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// URL of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{}/webhook/Contact", port)
}
