use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use super::EMAIL_REGEX;

pub const NAME_MAX_LENGTH: usize = 100;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 5000;

const FIELDS: [&str; 3] = ["name", "email", "message"];

/// Raw contact form submission. Absent and `null` fields are both `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Outcome of validating a `ContactDto`. `errors` keeps the order in which
/// the rules are listed: name, then email, then message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl Validate for ContactDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if is_blank(&self.name) {
            errors.add("name", error("required", "Name is required"));
        }
        if let Some(name) = present(&self.name) {
            if text_length(name) > NAME_MAX_LENGTH {
                errors.add(
                    "name",
                    error("length", "Name is too long (max 100 characters)"),
                );
            }
        }

        match &self.email {
            Some(email) if EMAIL_REGEX.is_match(email) => {}
            _ => errors.add("email", error("email", "Valid email is required")),
        }

        if is_blank(&self.message) {
            errors.add("message", error("required", "Message is required"));
        }
        if let Some(message) = present(&self.message) {
            let length = text_length(message);
            if length < MESSAGE_MIN_LENGTH {
                errors.add(
                    "message",
                    error("length", "Message is too short (minimum 10 characters)"),
                );
            }
            if length > MESSAGE_MAX_LENGTH {
                errors.add(
                    "message",
                    error("length", "Message is too long (maximum 5000 characters)"),
                );
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl ContactDto {
    pub fn validation(&self) -> ContactValidation {
        let errors = match self.validate() {
            Ok(_) => Vec::new(),
            Err(e) => flatten_errors(&e),
        };

        ContactValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut messages = Vec::new();

    for field in FIELDS {
        let Some(errors) = field_errors.get(field) else {
            continue;
        };

        for e in errors.iter() {
            match &e.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(e.code.to_string()),
            }
        }
    }

    messages
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

/// Length in UTF-16 code units, the unit browsers count form input in.
/// Characters outside the Basic Multilingual Plane count as two.
fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Missing, empty, or whitespace only.
fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(value) => value.trim().is_empty(),
        None => true,
    }
}

/// Some raw value with at least one character. Length rules only look at
/// these, so an empty string reports "required" alone.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
