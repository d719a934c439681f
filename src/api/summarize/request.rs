// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summarization request types and validation

use serde::{Deserialize, Serialize};

use crate::api::embed::TEXT_REQUIRED;
use crate::api::{GatewayError, JsonPayload};

/// Request for summarization via POST /api/summarize
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizeRequest {
    /// Text to summarize
    pub text: String,
}

impl SummarizeRequest {
    /// Same shape check as the embedding endpoint
    pub fn from_body(body: &[u8]) -> Result<Self, GatewayError> {
        let payload = JsonPayload::parse(body);
        let text = payload.required_string("text", TEXT_REQUIRED)?;
        Ok(Self { text })
    }
}
