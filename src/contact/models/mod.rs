pub mod contact_payload;
pub mod contact_receipt;
