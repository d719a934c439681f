// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lenient JSON body access for request validation.
//!
//! Bodies arrive as raw bytes. Content type is not checked; malformed JSON
//! and non-object bodies read as an empty object, so they fail the same
//! field checks as a missing field.

use serde_json::{Map, Value};
use tracing::debug;

use super::errors::GatewayError;

#[derive(Debug, Default)]
pub struct JsonPayload {
    fields: Map<String, Value>,
}

impl JsonPayload {
    /// Anything other than a JSON object parses as an empty payload
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Self { fields },
            Ok(other) => {
                debug!("Request body is JSON but not an object: {}", json_kind(&other));
                Self::default()
            }
            Err(e) => {
                debug!("Request body is not valid JSON: {}", e);
                Self::default()
            }
        }
    }

    /// A present, non-empty string, else a validation error with `message`
    pub fn required_string(&self, field: &str, message: &str) -> Result<String, GatewayError> {
        match self.fields.get(field) {
            Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
            _ => Err(GatewayError::validation(field, message)),
        }
    }

    /// Absent or null is `None`; any non-string value is rejected
    pub fn optional_string(&self, field: &str) -> Result<Option<String>, GatewayError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(GatewayError::validation(
                field,
                format!("{} must be a string", field),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
