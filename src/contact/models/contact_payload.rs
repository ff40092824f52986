use serde::Serialize;

use crate::{
    app::util::time::current_timestamp,
    contact::dtos::contact_dto::{ContactDto, ContactValidation},
};

pub const CONTACT_SOURCE: &str = "contact-form";

/// Normalized submission forwarded to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
    pub source: String,
}

impl ContactPayload {
    /// Builds the payload only when `dto` passes validation; otherwise the
    /// failed validation is handed back untouched.
    pub fn try_from_dto(dto: &ContactDto) -> Result<ContactPayload, ContactValidation> {
        let validation = dto.validation();

        match (&dto.name, &dto.email, &dto.message) {
            (Some(name), Some(email), Some(message)) if validation.is_valid => {
                Ok(ContactPayload {
                    name: name.trim().to_string(),
                    email: email.trim().to_lowercase(),
                    message: message.trim().to_string(),
                    timestamp: current_timestamp(),
                    source: CONTACT_SOURCE.to_string(),
                })
            }
            _ => Err(validation),
        }
    }
}
