// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::rejection::BytesRejection, http::StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::{ConfigurationError, ProviderError};

/// Error envelope returned to callers: exactly `{ "error": <message> }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// The three generation operations the gateway exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Embedding,
    Summarization,
    ImageSynthesis,
}

impl Capability {
    /// Stable name used as a log field
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Embedding => "embedding",
            Capability::Summarization => "summarization",
            Capability::ImageSynthesis => "image_synthesis",
        }
    }

    /// Fixed caller-facing message for any server-side failure
    pub fn failure_message(&self) -> &'static str {
        match self {
            Capability::Embedding => "Failed to generate embedding",
            Capability::Summarization => "Failed to generate summary",
            Capability::ImageSynthesis => "Failed to generate image",
        }
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("validation error for {field}: {message}")]
    Validation { field: String, message: String },

    /// The body could not be read, e.g. it exceeds the configured limit
    #[error("request body rejected ({status}): {reason}")]
    Body { status: StatusCode, reason: String },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl GatewayError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        GatewayError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation { .. } => "validation",
            GatewayError::Body { .. } => "body",
            GatewayError::Configuration(_) => "configuration",
            GatewayError::Provider(_) => "provider",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation { .. } => StatusCode::BAD_REQUEST,
            GatewayError::Body { status, .. } => *status,
            GatewayError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body for the caller. Only validation messages are surfaced verbatim.
    pub fn to_response(&self, capability: Capability) -> ErrorResponse {
        let error = match self {
            GatewayError::Validation { message, .. } => message.clone(),
            GatewayError::Body { .. }
            | GatewayError::Configuration(_)
            | GatewayError::Provider(_) => {
                capability.failure_message().to_string()
            }
        };
        ErrorResponse { error }
    }
}

impl From<BytesRejection> for GatewayError {
    fn from(rejection: BytesRejection) -> Self {
        GatewayError::Body {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}
