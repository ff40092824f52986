//! Single forwarding attempt to the n8n webhook.
//!
//! The outcome is classified so the handler can pick a status:
//! connect-level failures are `Unreachable`, non-2xx answers are `Rejected`,
//! and everything else (timeouts included) is `Failed`.

use reqwest::{header::CONTENT_TYPE, StatusCode};
use thiserror::Error;
use tracing::Instrument;

use crate::contact::models::contact_payload::ContactPayload;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook unreachable: {0}")]
    Unreachable(String),
    #[error("webhook responded with {0}")]
    Rejected(StatusCode),
    #[error("webhook call failed: {0}")]
    Failed(String),
}

/// Posts `payload` as JSON to `url`. The client's timeout bounds the call.
pub async fn forward(
    client: &reqwest::Client,
    url: &str,
    payload: &ContactPayload,
) -> Result<(), WebhookError> {
    let span = tracing::info_span!("webhook_forward", %url);

    async move {
        let result = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => return Err(classify(e)),
        };

        let status = res.status();
        match res.text().await {
            Ok(text) => tracing::debug!(%status, %text, "webhook response"),
            Err(e) => {
                tracing::error!(%status, %e, "failed to read webhook response");
                return Err(WebhookError::Failed(e.to_string()));
            }
        }

        if !status.is_success() {
            return Err(WebhookError::Rejected(status));
        }

        Ok(())
    }
    .instrument(span)
    .await
}

fn classify(e: reqwest::Error) -> WebhookError {
    if e.is_timeout() {
        WebhookError::Failed(e.to_string())
    } else if e.is_connect() {
        WebhookError::Unreachable(e.to_string())
    } else {
        WebhookError::Failed(e.to_string())
    }
}
