// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream provider configuration (credential, endpoint, timeout)

use clap::Args;
use secrecy::{ExposeSecret, SecretString};
use std::convert::Infallible;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default OpenAI-compatible API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default upstream timeout, matching the provider SDK default of ten minutes
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Settings used to build the provider client on first use.
///
/// The credential is held as a [`SecretString`], so `Debug` output of this
/// struct (and of [`super::GatewayConfig`]) never contains the key.
#[derive(Args, Debug, Clone)]
pub struct ProviderConfig {
    /// API key for the upstream provider
    #[arg(
        long = "openai-api-key",
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        value_parser = parse_secret
    )]
    pub api_key: Option<SecretString>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Overall timeout for one upstream call, in seconds
    #[arg(long = "provider-timeout-secs", env = "PROVIDER_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProviderConfigError {
    #[error("invalid provider base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("provider timeout must be greater than 0 seconds")]
    ZeroTimeout,
}

fn parse_secret(raw: &str) -> Result<SecretString, Infallible> {
    Ok(SecretString::from(raw.to_string()))
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Config with the given credential and default endpoint/timeout
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::from(api_key.into())),
            ..Self::default()
        }
    }

    /// Replace the base URL (builder pattern)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Credential if present and non-blank
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn has_credential(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Startup checks. The credential is deliberately not checked here:
    /// a missing key fails each capability at first use.
    pub fn validate(&self) -> Result<(), ProviderConfigError> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            ProviderConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            }
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProviderConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.request_timeout_secs == 0 {
            return Err(ProviderConfigError::ZeroTimeout);
        }

        Ok(())
    }
}
