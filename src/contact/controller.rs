use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::contact_dto::ContactDto, models::contact_receipt::ContactReceipt, service};

pub async fn submit_contact(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<ContactDto>,
) -> Result<Json<ContactReceipt>, ApiError> {
    tracing::info!("received contact form submission");
    tracing::debug!(?dto);

    match service::submit_contact(&dto, &state).await {
        Ok(receipt) => Ok(Json(receipt)),
        Err(e) => Err(e),
    }
}
