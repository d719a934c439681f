// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Response,
};
use tracing::{debug, info};

use super::request::GenerateImageRequest;
use super::response::GenerateImageResponse;
use crate::api::http_server::AppState;
use crate::api::response_formatter::respond;
use crate::api::{Capability, GatewayError};

/// POST /api/generate-image - Generate an image from a text prompt
///
/// Pipeline:
/// 1. Validate `prompt` (and the type of the optional fields)
/// 2. Get the provider client (503 if no credential is configured)
/// 3. Delegate to the image generation wrapper
/// 4. Flatten its result into `{ success, imageUrl, model, cost }`
pub async fn generate_image_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => generate_image(&state, &body).await,
        Err(rejection) => Err(rejection.into()),
    };
    respond(Capability::ImageSynthesis, result)
}

async fn generate_image(
    state: &AppState,
    body: &[u8],
) -> Result<GenerateImageResponse, GatewayError> {
    let request = GenerateImageRequest::from_body(body)?;
    let client = state.factory.get_client().await?;

    debug!(
        "Image generation request received: prompt_len={}, size={:?}, quality={:?}, style={:?}",
        request.prompt.len(),
        request.size,
        request.quality,
        request.style
    );

    let result = state
        .image_generator
        .generate(client.as_ref(), request.into())
        .await?;

    info!(
        "Image generated: model={}, cost={:.3}",
        result.model.id, result.usage.cost
    );
    if let Some(revised) = &result.revised_prompt {
        debug!("Provider revised prompt: {}", revised);
    }

    Ok(GenerateImageResponse::from(result))
}
