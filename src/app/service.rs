use serde_json::{json, Value};

use super::util::time::current_timestamp;

pub const SERVICE_NAME: &str = "Contact Form API";
pub const DOCUMENTATION_URL: &str = "https://github.com/Victor-VIO/contact-form-project";

pub fn get_root() -> Value {
    json!({
        "message": SERVICE_NAME,
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "contact": "/contact (POST)",
        },
        "documentation": DOCUMENTATION_URL,
    })
}

pub fn get_health() -> Value {
    json!({
        "status": "OK",
        "timestamp": current_timestamp(),
        "service": SERVICE_NAME,
    })
}
