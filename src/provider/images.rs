// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation wrapper: one provider call plus model and cost reporting

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::GenerationProvider;
use super::error::ProviderError;
use super::pricing::ImagePricing;
use super::types::ImageRequest;

/// Caller-controlled options, passed to the provider as given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationParams {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRef {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageUsage {
    /// Cost in USD
    pub cost: f64,
}

/// Result bundle: asset reference, model used, usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationResult {
    /// URL (or data URL) of the generated image
    pub data: String,
    pub model: ModelRef,
    pub usage: ImageUsage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

pub struct ImageGenerator {
    model: String,
    pricing: ImagePricing,
}

impl ImageGenerator {
    pub fn new(model: impl Into<String>, pricing: ImagePricing) -> Self {
        Self {
            model: model.into(),
            pricing,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a single image through `provider`
    pub async fn generate(
        &self,
        provider: &dyn GenerationProvider,
        params: ImageGenerationParams,
    ) -> Result<ImageGenerationResult, ProviderError> {
        let cost = self.pricing.cost(
            &self.model,
            params.size.as_deref(),
            params.quality.as_deref(),
        );

        let request = ImageRequest {
            model: self.model.clone(),
            prompt: params.prompt,
            n: 1,
            size: params.size,
            quality: params.quality,
            style: params.style,
            response_format: url_response_format(&self.model),
        };

        let response = provider.create_image(request).await?;
        let first = response
            .data
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyResponse("image"))?;
        let data = first
            .asset_reference()
            .ok_or(ProviderError::EmptyResponse("image url"))?;

        debug!("Image generated: model={}, cost={}", self.model, cost);

        Ok(ImageGenerationResult {
            data,
            model: ModelRef {
                id: self.model.clone(),
            },
            usage: ImageUsage { cost },
            revised_prompt: first.revised_prompt,
        })
    }
}

/// `gpt-image-*` models reject `response_format` and always answer with
/// base64. dall-e models are asked for a hosted URL.
fn url_response_format(model: &str) -> Option<String> {
    if model.starts_with("gpt-image") {
        None
    } else {
        Some("url".to_string())
    }
}
