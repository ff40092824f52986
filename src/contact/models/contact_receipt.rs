use serde::Serialize;

use super::contact_payload::ContactPayload;

pub const RECEIPT_MESSAGE: &str = "Message received and being processed";

/// Success body for `POST /contact`. Echoes the normalized name and email
/// only.
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
    pub data: ContactReceiptData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactReceiptData {
    pub name: String,
    pub email: String,
}

impl ContactReceipt {
    pub fn new(payload: &ContactPayload) -> ContactReceipt {
        ContactReceipt {
            success: true,
            message: RECEIPT_MESSAGE.to_string(),
            data: ContactReceiptData {
                name: payload.name.to_string(),
                email: payload.email.to_string(),
            },
        }
    }
}
