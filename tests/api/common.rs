// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers for API tests: a mockall provider and a oneshot client

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use genai_gateway::api::{create_app, AppState};
use genai_gateway::config::{ModelConfig, ProviderConfig, SummaryConfig};
use genai_gateway::provider::{
    ChatCompletionRequest, ChatCompletionResponse, EmbeddingRequest, EmbeddingResponse,
    GenerationProvider, ImageGenerator, ImagePricing, ImageRequest, ImageResponse,
    ProviderClientFactory, ProviderError,
};
use mockall::mock;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

mock! {
    pub Provider {}

    #[async_trait]
    impl GenerationProvider for Provider {
        async fn create_embedding(
            &self,
            request: EmbeddingRequest,
        ) -> Result<EmbeddingResponse, ProviderError>;

        async fn create_chat_completion(
            &self,
            request: ChatCompletionRequest,
        ) -> Result<ChatCompletionResponse, ProviderError>;

        async fn create_image(&self, request: ImageRequest) -> Result<ImageResponse, ProviderError>;
    }
}

/// Mock with no expectations: any call panics the handler task
pub fn untouched_provider() -> MockProvider {
    let mut provider = MockProvider::new();
    provider.expect_create_embedding().never();
    provider.expect_create_chat_completion().never();
    provider.expect_create_image().never();
    provider
}

/// App backed by `provider`, image model "m1" at a flat $0.02 per image
pub fn app_with_provider(provider: MockProvider) -> Router {
    app_with_provider_and_images(provider, ImageGenerator::new("m1", ImagePricing::Flat(0.02)))
}

pub fn app_with_provider_and_images(provider: MockProvider, images: ImageGenerator) -> Router {
    create_app(state_with_provider(provider, images))
}

/// App that refuses request bodies larger than `max_body_bytes`
pub fn app_with_body_limit(provider: MockProvider, max_body_bytes: usize) -> Router {
    let images = ImageGenerator::new("m1", ImagePricing::Flat(0.02));
    create_app(state_with_provider(provider, images).with_max_body_bytes(max_body_bytes))
}

fn state_with_provider(provider: MockProvider, images: ImageGenerator) -> AppState {
    let factory = ProviderClientFactory::with_client(ProviderConfig::default(), Arc::new(provider));
    AppState::new(
        factory,
        ModelConfig::default(),
        SummaryConfig::default(),
        images,
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> TestResponse {
    post_raw(app, uri, body.to_string()).await
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
