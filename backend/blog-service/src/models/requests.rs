//! Request payloads and their field rules.
//!
//! Every field is optional at the serde level so that a missing field turns
//! into a per-field message instead of a generic decoding failure. Bodies are
//! decoded by the services, after the target post has been loaded.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

pub const TITLE_MAX_CHARS: usize = 255;

const BLANK: &str = "This field may not be blank.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub body: Option<String>,
}

impl PostPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    /// Trim surrounding whitespace; stored values are always trimmed.
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.map(|t| t.trim().to_string()),
            body: self.body.map(|b| b.trim().to_string()),
        }
    }

    /// Consume a validated payload.
    pub fn into_fields(self) -> (String, String) {
        (self.title.unwrap_or_default(), self.body.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CommentPayload {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub body: Option<String>,
}

impl CommentPayload {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            body: self.body.map(|b| b.trim().to_string()),
        }
    }

    pub fn into_body(self) -> String {
        self.body.unwrap_or_default()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(BLANK.into()));
    }
    Ok(())
}

/// Decode a request body that must be a JSON object.
///
/// An empty body reads as `{}` so that every field reports as required.
pub fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Object(Default::default()))?);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("JSON parse error - {}", e)))?;

    if value.is_object() {
        return Ok(serde_json::from_value(value)?);
    }

    let kind = match value {
        Value::Array(_) => "list",
        Value::String(_) => "str",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
        Value::Null => "null",
        Value::Object(_) => "dict",
    };

    Err(AppError::BadRequest(format!(
        "Invalid data. Expected a dictionary, but got {}.",
        kind
    )))
}
