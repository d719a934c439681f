// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Lazily built, process-wide provider client

use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::client::{GenerationProvider, OpenAiClient};
use super::error::ConfigurationError;
use crate::config::{ProviderConfig, API_KEY_ENV};

/// Builds the provider client on first use and hands out the same handle
/// afterwards.
///
/// Initialization runs at most once even when several requests arrive
/// together; a failed attempt (missing credential) memoizes nothing, so the
/// next call checks the configuration again.
pub struct ProviderClientFactory {
    config: ProviderConfig,
    client: OnceCell<Arc<dyn GenerationProvider>>,
}

impl ProviderClientFactory {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Factory that always returns `client`, skipping construction
    pub fn with_client(config: ProviderConfig, client: Arc<dyn GenerationProvider>) -> Self {
        Self {
            config,
            client: OnceCell::new_with(Some(client)),
        }
    }

    pub async fn get_client(&self) -> Result<Arc<dyn GenerationProvider>, ConfigurationError> {
        let client = self
            .client
            .get_or_try_init(|| async { self.build_client() })
            .await?;
        Ok(Arc::clone(client))
    }

    /// Whether a client exists or could be built
    pub fn is_configured(&self) -> bool {
        self.client.initialized() || self.config.has_credential()
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    fn build_client(&self) -> Result<Arc<dyn GenerationProvider>, ConfigurationError> {
        let Some(api_key) = self.config.api_key() else {
            warn!("Provider client requested but {} is not set", API_KEY_ENV);
            return Err(ConfigurationError::MissingCredential { var: API_KEY_ENV });
        };

        let client = OpenAiClient::new(
            self.config.normalized_base_url(),
            api_key.clone(),
            self.config.request_timeout(),
        )
        .map_err(ConfigurationError::ClientBuild)?;

        info!(
            base_url = %client.base_url(),
            timeout_secs = self.config.request_timeout_secs,
            "Provider client initialized"
        );

        Ok(Arc::new(client))
    }
}
