use crate::{app::models::api_error::ApiError, AppState};

use super::{
    dtos::contact_dto::ContactDto,
    errors::ContactApiError,
    models::{contact_payload::ContactPayload, contact_receipt::ContactReceipt},
    util::webhook,
};

pub async fn submit_contact(
    dto: &ContactDto,
    state: &AppState,
) -> Result<ContactReceipt, ApiError> {
    let payload = match ContactPayload::try_from_dto(dto) {
        Ok(payload) => payload,
        Err(validation) => {
            tracing::info!(errors = ?validation.errors, "contact submission failed validation");
            return Err(ContactApiError::ValidationFailed(validation.errors).value());
        }
    };

    tracing::info!("forwarding contact submission to webhook");

    match webhook::forward(&state.http_client, state.envy.webhook_url(), &payload).await {
        Ok(_) => {
            tracing::info!("contact submission forwarded");
            Ok(ContactReceipt::new(&payload))
        }
        Err(e) => {
            tracing::error!(%e, "failed to forward contact submission");
            Err(ContactApiError::from(e).value())
        }
    }
}
