// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gateway configuration, parsed once at startup from flags and environment

pub mod provider;

pub use provider::{ProviderConfig, ProviderConfigError, API_KEY_ENV};

use clap::{Args, Parser};
use std::net::SocketAddr;

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_SUMMARY_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_SUMMARY_MAX_TOKENS: u32 = 150;
pub const DEFAULT_SUMMARY_TEMPERATURE: f64 = 0.3;
/// Largest request body the capability routes will read (2 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// AI generation gateway
#[derive(Parser, Debug, Clone)]
#[command(name = "genai-gateway")]
#[command(version)]
#[command(about = "HTTP gateway for embedding, summarization and image generation", long_about = None)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to
    #[arg(long, env = "GATEWAY_LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    pub listen_addr: SocketAddr,

    /// Request bodies above this size are answered with 413
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[command(flatten)]
    pub provider: ProviderConfig,

    #[command(flatten)]
    pub models: ModelConfig,

    #[command(flatten)]
    pub summary: SummaryConfig,

    #[command(flatten)]
    pub image: ImageConfig,
}

/// Fixed model identifier per capability
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ModelConfig {
    #[arg(long, env = "EMBEDDING_MODEL", default_value = DEFAULT_EMBEDDING_MODEL)]
    pub embedding_model: String,

    #[arg(long, env = "SUMMARY_MODEL", default_value = DEFAULT_SUMMARY_MODEL)]
    pub summary_model: String,

    #[arg(long, env = "IMAGE_MODEL", default_value = DEFAULT_IMAGE_MODEL)]
    pub image_model: String,
}

/// Sampling bounds for the summarization call
#[derive(Args, Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    #[arg(long = "summary-max-tokens", env = "SUMMARY_MAX_TOKENS", default_value_t = DEFAULT_SUMMARY_MAX_TOKENS)]
    pub max_tokens: u32,

    #[arg(long = "summary-temperature", env = "SUMMARY_TEMPERATURE", default_value_t = DEFAULT_SUMMARY_TEMPERATURE)]
    pub temperature: f64,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ImageConfig {
    /// Report this flat per-image cost instead of the built-in price table
    #[arg(long = "image-flat-cost", env = "IMAGE_FLAT_COST")]
    pub flat_cost: Option<f64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_SUMMARY_MAX_TOKENS,
            temperature: DEFAULT_SUMMARY_TEMPERATURE,
        }
    }
}

impl GatewayConfig {
    /// Fail fast on settings that can never work
    pub fn validate(&self) -> anyhow::Result<()> {
        self.provider.validate()?;

        if self.max_body_bytes == 0 {
            anyhow::bail!("max body bytes must be greater than 0");
        }
        if self.summary.max_tokens == 0 {
            anyhow::bail!("summary max tokens must be greater than 0");
        }
        if !(0.0..=2.0).contains(&self.summary.temperature) {
            anyhow::bail!(
                "summary temperature must be between 0.0 and 2.0, got {}",
                self.summary.temperature
            );
        }
        if let Some(cost) = self.image.flat_cost {
            if !cost.is_finite() || cost < 0.0 {
                anyhow::bail!("image flat cost must be a non-negative number, got {}", cost);
            }
        }

        Ok(())
    }
}
