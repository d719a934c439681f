// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Maps handler outcomes onto the uniform HTTP envelope

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

use super::errors::{Capability, GatewayError};

/// Response header carrying the opaque reference of a logged failure
pub const ERROR_REF_HEADER: &str = "x-error-ref";

/// Emit `200` with `payload`, or the capability's error envelope.
///
/// Server-side failures are logged here, once, with the full error and an
/// opaque reference; the body only ever carries the fixed message.
pub fn respond<T: Serialize>(capability: Capability, result: Result<T, GatewayError>) -> Response {
    match result {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => error_response(capability, &err),
    }
}

pub fn error_response(capability: Capability, err: &GatewayError) -> Response {
    let status = err.status_code();
    let body = Json(err.to_response(capability));

    match err {
        GatewayError::Validation { field, message } => {
            warn!(
                capability = capability.name(),
                field = %field,
                "Rejected request: {}",
                message
            );
            return (status, body).into_response();
        }
        GatewayError::Body { reason, .. } => {
            warn!(
                capability = capability.name(),
                status = status.as_u16(),
                "Rejected request body: {}",
                reason
            );
            return (status, body).into_response();
        }
        _ => {}
    }

    let error_ref = Uuid::new_v4();
    error!(
        capability = capability.name(),
        error_kind = err.kind(),
        error_ref = %error_ref,
        rate_limited = rate_limited(err),
        error = %err,
        "{}",
        capability.failure_message()
    );

    let mut response = (status, body).into_response();
    if let Ok(value) = HeaderValue::from_str(&error_ref.to_string()) {
        response.headers_mut().insert(ERROR_REF_HEADER, value);
    }
    response
}

fn rate_limited(err: &GatewayError) -> bool {
    matches!(err, GatewayError::Provider(e) if e.is_rate_limited())
}
