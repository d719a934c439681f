// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /api/embedding HTTP handler

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Response,
};
use tracing::debug;

use crate::api::embed::{EmbedRequest, EmbedResponse};
use crate::api::http_server::AppState;
use crate::api::response_formatter::respond;
use crate::api::{Capability, GatewayError};
use crate::provider::{EmbeddingRequest, ProviderError};

/// POST /api/embedding handler
///
/// Pipeline: validate `text` (400 before any provider work) → obtain the
/// shared provider client → one embedding call with the configured model →
/// return the first vector.
///
/// # Response Body
/// ```json
/// { "embedding": [0.1, 0.2, ...] }
/// ```
pub async fn embed_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => embed(&state, &body).await,
        Err(rejection) => Err(rejection.into()),
    };
    respond(Capability::Embedding, result)
}

async fn embed(state: &AppState, body: &[u8]) -> Result<EmbedResponse, GatewayError> {
    let request = EmbedRequest::from_body(body)?;
    let client = state.factory.get_client().await?;

    debug!(
        "Embedding request: model={}, text_len={}",
        state.models.embedding_model,
        request.text.len()
    );

    let response = client
        .create_embedding(EmbeddingRequest::new(
            state.models.embedding_model.as_str(),
            request.text,
        ))
        .await?;

    if let Some(usage) = response.usage {
        debug!("Embedding usage: total_tokens={}", usage.total_tokens);
    }

    let embedding = response
        .into_first_embedding()
        .ok_or(ProviderError::EmptyResponse("embedding"))?;

    let response = EmbedResponse::from(embedding);
    debug!("Embedding generated: dimensions={}", response.dimensions());
    Ok(response)
}
