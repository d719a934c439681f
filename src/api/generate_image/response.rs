// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response types

use serde::{Deserialize, Serialize};

use crate::provider::ImageGenerationResult;

/// Response from image generation:
/// exactly `{ "success": true, "imageUrl", "model", "cost" }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    /// Always true on the success path
    pub success: bool,
    /// URL (or data URL) of the generated image
    pub image_url: String,
    /// Identifier of the model used for generation
    pub model: String,
    /// Cost in USD
    pub cost: f64,
}

impl From<ImageGenerationResult> for GenerateImageResponse {
    fn from(result: ImageGenerationResult) -> Self {
        Self {
            success: true,
            image_url: result.data,
            model: result.model.id,
            cost: result.usage.cost,
        }
    }
}
