// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Failure kinds raised below the HTTP boundary

use thiserror::Error;

/// Operator-side fault: the provider client cannot be built
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("provider credential is not configured (set {var})")]
    MissingCredential { var: &'static str },

    #[error("failed to build provider HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Any failure of the single upstream call
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("provider returned no {0}")]
    EmptyResponse(&'static str),
}

impl ProviderError {
    /// Rate limiting is reported as a status error like any other
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ProviderError::Status { status: 429, .. })
    }
}
