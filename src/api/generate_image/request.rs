// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request types and validation

use serde::{Deserialize, Serialize};

use crate::api::{GatewayError, JsonPayload};
use crate::provider::ImageGenerationParams;

/// Fixed 400 message for a missing or non-string `prompt`
pub const PROMPT_REQUIRED: &str = "Prompt is required and must be a string";

/// Request for image generation via POST /api/generate-image
///
/// `size`, `quality` and `style` are provider-defined values and are passed
/// through as given; only their type is checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateImageRequest {
    /// Text prompt describing the desired image
    pub prompt: String,

    /// Output image size (e.g., "1024x1024")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Quality tier (e.g., "standard", "hd")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    /// Style hint (e.g., "vivid", "natural")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl GenerateImageRequest {
    /// Parse and validate the image generation request
    pub fn from_body(body: &[u8]) -> Result<Self, GatewayError> {
        let payload = JsonPayload::parse(body);

        let prompt = payload.required_string("prompt", PROMPT_REQUIRED)?;
        let size = payload.optional_string("size")?;
        let quality = payload.optional_string("quality")?;
        let style = payload.optional_string("style")?;

        Ok(Self {
            prompt,
            size,
            quality,
            style,
        })
    }
}

impl From<GenerateImageRequest> for ImageGenerationParams {
    fn from(request: GenerateImageRequest) -> Self {
        ImageGenerationParams {
            prompt: request.prompt,
            size: request.size,
            quality: request.quality,
            style: request.style,
        }
    }
}
