// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod provider;
pub mod version;

pub use api::{create_app, start_server, AppState, Capability, GatewayError};
pub use config::{GatewayConfig, ModelConfig, ProviderConfig, SummaryConfig};
pub use provider::{
    ConfigurationError, GenerationProvider, ImageGenerator, ImagePricing, OpenAiClient,
    ProviderClientFactory, ProviderError,
};
