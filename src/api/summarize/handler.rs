// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Summarization endpoint handler

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Response,
};
use tracing::{debug, info};

use super::request::SummarizeRequest;
use super::response::SummarizeResponse;
use crate::api::http_server::AppState;
use crate::api::response_formatter::respond;
use crate::api::{Capability, GatewayError};
use crate::config::SummaryConfig;
use crate::provider::{ChatCompletionRequest, ChatMessage};

/// System instruction constraining the completion to a concise summary
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a helpful assistant that creates concise summaries. \
     Keep summaries under 100 words and capture the main ideas of the text.";

/// POST /api/summarize - Summarize the caller's text
///
/// Pipeline:
/// 1. Validate `text` (400 if missing or not a string)
/// 2. Get the provider client (503 if no credential is configured)
/// 3. One chat completion with the summary instruction, bounded length and
///    low temperature
/// 4. Return the first choice's content, or the original text when the
///    provider returns no content
pub async fn summarize_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => summarize(&state, &body).await,
        Err(rejection) => Err(rejection.into()),
    };
    respond(Capability::Summarization, result)
}

async fn summarize(state: &AppState, body: &[u8]) -> Result<SummarizeResponse, GatewayError> {
    let request = SummarizeRequest::from_body(body)?;
    let client = state.factory.get_client().await?;

    debug!(
        "Summarization request received: text_len={}",
        request.text.len()
    );

    let completion = client
        .create_chat_completion(build_summary_request(
            &state.models.summary_model,
            &state.summary,
            &request.text,
        ))
        .await?;

    let content = completion.first_content();
    if content.is_none() {
        info!("Provider returned no summary content; echoing input text");
    }

    Ok(SummarizeResponse::with_fallback(content, request.text))
}

pub fn build_summary_request(
    model: &str,
    settings: &SummaryConfig,
    text: &str,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
            ChatMessage::user(format!("Please summarize the following text:\n\n{}", text)),
        ],
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    }
}
