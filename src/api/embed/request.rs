// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbedRequest type for POST /api/embedding

use crate::api::{GatewayError, JsonPayload};
use serde::{Deserialize, Serialize};

/// Fixed 400 message for a missing or non-string `text`
pub const TEXT_REQUIRED: &str = "Text is required";

/// Request body for POST /api/embedding
///
/// # Example
/// ```json
/// { "text": "Hello world" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedRequest {
    /// Text to embed, sent to the provider as the sole input
    pub text: String,
}

impl EmbedRequest {
    /// Parses and validates a raw request body
    ///
    /// # Returns
    /// - `Ok(EmbedRequest)` when `text` is a non-empty string
    /// - `Err(GatewayError::Validation)` with [`TEXT_REQUIRED`] otherwise
    pub fn from_body(body: &[u8]) -> Result<Self, GatewayError> {
        let payload = JsonPayload::parse(body);
        let text = payload.required_string("text", TEXT_REQUIRED)?;
        Ok(Self { text })
    }
}
